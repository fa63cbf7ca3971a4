/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// runner-args — show how a runner command line is split into options and arguments.
#[derive(Debug, Parser)]
#[command(
    name = "runner-args",
    about = "Parse runner command lines into options and arguments, merging a runner.args file",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log parser decisions and timing to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory searched for `runner.args` and used to resolve relative
    /// `--args` paths. Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR", env = "RUNNER_ARGS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
    /// Bare values, one per line.
    Plain,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the options and arguments parsed from a command line.
    Parse(RawArgs),
    /// Print the value of a single option.
    Get(GetArgs),
    /// Print the positional arguments.
    Arguments(RawArgs),
}

/// Raw tokens to parse, given after `--`.
#[derive(Debug, Parser)]
pub struct RawArgs {
    /// Command-line tokens, e.g. `-- --noStart --args=extra.args bundle.jar`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "RAW")]
    pub raw: Vec<String>,
}

/// Arguments for `runner-args get`.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Option name to look up (exact, case-sensitive).
    pub key: String,

    #[command(flatten)]
    pub tokens: RawArgs,
}
