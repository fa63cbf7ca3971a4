/// Output formatting: JSON, table, plain modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{CommandLineOutput, ErrorOutput, OptionOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print phase timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Full command line ---

/// Write the parsed command line to stdout.
pub fn write_command_line(cmdline: &CommandLineOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(cmdline),
        OutputFormat::Compact => print_compact_json(cmdline),
        OutputFormat::Plain => {
            for opt in &cmdline.options {
                println!("--{}={}", opt.key, opt.value);
            }
            for arg in &cmdline.arguments {
                println!("{arg}");
            }
        }
        OutputFormat::Table | OutputFormat::Auto => print!("{}", render_table(cmdline, ctx)),
    }
}

fn render_table(cmdline: &CommandLineOutput, ctx: &OutputCtx) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["KIND", "NAME", "VALUE"]);
    }
    for opt in &cmdline.options {
        table.add_row(["option", opt.key.as_str(), opt.value.as_str()]);
    }
    for (i, arg) in cmdline.arguments.iter().enumerate() {
        table.add_row(["argument", &i.to_string(), arg.as_str()]);
    }

    let mut out = format!("{table}\n");
    if let Some(file) = &cmdline.args_file {
        out.push_str(&format!("args file: {file}\n"));
    }
    out
}

// --- Single option ---

/// Write one option to stdout.
pub fn write_option(opt: &OptionOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(opt),
        OutputFormat::Compact => print_compact_json(opt),
        OutputFormat::Plain => println!("{}", opt.value),
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["NAME", "VALUE"]);
            }
            table.add_row([opt.key.as_str(), opt.value.as_str()]);
            println!("{table}");
        }
    }
}

// --- Arguments ---

/// Write positional arguments to stdout.
pub fn write_arguments(arguments: &[String], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(arguments),
        OutputFormat::Compact => print_compact_json(arguments),
        OutputFormat::Plain => {
            for arg in arguments {
                println!("{arg}");
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["#", "ARGUMENT"]);
            }
            for (i, arg) in arguments.iter().enumerate() {
                table.add_row([i.to_string(), arg.clone()]);
            }
            println!("{table}");
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
