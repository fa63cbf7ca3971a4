/// `arguments` command: print the positional arguments.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::RawArgs;
use crate::cli::output::write_arguments;
use crate::cmdline::CommandLineError;

/// Run `runner-args arguments`.
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
    write_arguments(cmdline.arguments(), ctx);
    Ok(())
}
