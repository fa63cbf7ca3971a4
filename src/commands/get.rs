/// `get` command: print the value of a single option.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::GetArgs;
use crate::cli::output::write_option;
use crate::cmdline::CommandLineError;
use crate::types::OptionOutput;

/// Run `runner-args get`.
///
/// # Errors
///
/// Returns `CommandLineError::OptionNotFound` when the key is not set, or any
/// error from loading the args file.
pub fn run(
    args: &GetArgs,
    base_dir: Option<&Path>,
    ctx: &OutputCtx,
) -> Result<(), CommandLineError> {
    let cmdline = super::load(&args.tokens.raw, base_dir, ctx)?;
    let value = cmdline
        .option(&args.key)
        .ok_or_else(|| CommandLineError::OptionNotFound {
            key: args.key.clone(),
        })?;

    let output = OptionOutput {
        key: args.key.clone(),
        value: value.to_owned(),
    };
    write_option(&output, ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::args::RawArgs;

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Plain, false, true, false)
    }

    fn get(key: &str, raw: &[&str]) -> GetArgs {
        GetArgs {
            key: key.to_owned(),
            tokens: RawArgs {
                raw: raw.iter().map(|s| (*s).to_owned()).collect(),
            },
        }
    }

    #[test]
    fn test_missing_option() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&get("profile", &["--debug"]), Some(dir.path()), &ctx()).unwrap_err();
        assert!(matches!(err, CommandLineError::OptionNotFound { ref key } if key == "profile"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_present_option() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&get("profile", &["--profile=dev"]), Some(dir.path()), &ctx()).is_ok());
    }
}
