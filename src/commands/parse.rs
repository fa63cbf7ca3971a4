/// `parse` command: show every option and argument.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::RawArgs;
use crate::cli::output::write_command_line;
use crate::cmdline::CommandLineError;
use crate::types::CommandLineOutput;

/// Run `runner-args parse`.
///
/// # Errors
///
/// Returns `CommandLineError` when the args file location is malformed or unreadable.
pub fn run(
    args: &RawArgs,
    base_dir: Option<&Path>,
    ctx: &OutputCtx,
) -> Result<(), CommandLineError> {
    let cmdline = super::load(&args.raw, base_dir, ctx)?;
    write_command_line(&CommandLineOutput::from(&cmdline), ctx);
    Ok(())
}
