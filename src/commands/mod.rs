/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod arguments;
pub mod get;
pub mod parse;

use std::path::Path;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::cmdline::{CommandLine, CommandLineError};

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CommandLineError` on any command failure.
pub fn dispatch(
    command: &Command,
    base_dir: Option<&Path>,
    ctx: &OutputCtx,
) -> Result<(), CommandLineError> {
    match command {
        Command::Parse(args) => parse::run(args, base_dir, ctx),
        Command::Get(args) => get::run(args, base_dir, ctx),
        Command::Arguments(args) => arguments::run(args, base_dir, ctx),
    }
}

/// Build the command line for `raw`, timing the parse under `--debug`.
fn load(
    raw: &[String],
    base_dir: Option<&Path>,
    ctx: &OutputCtx,
) -> Result<CommandLine, CommandLineError> {
    let _t = ctx.timer("parse_command_line");
    let cmdline = match base_dir {
        Some(dir) => CommandLine::parse_in(raw, dir)?,
        None => CommandLine::parse(raw)?,
    };
    debug!(%cmdline, "parsed command line");
    Ok(cmdline)
}
