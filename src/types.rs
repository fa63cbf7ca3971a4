/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the internal `CommandLine` model.
use serde::{Deserialize, Serialize};

use crate::cmdline::{CommandLine, CommandLineError};

/// A single `key=value` option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionOutput {
    /// Option name, after negation handling.
    pub key: String,
    /// Option value (`"true"`/`"false"` for flags).
    pub value: String,
}

/// The full parsed command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandLineOutput {
    /// Options ordered by key.
    pub options: Vec<OptionOutput>,
    /// Positional arguments in first-seen order.
    pub arguments: Vec<String>,
    /// URL of the args file that was merged in, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args_file: Option<String>,
}

impl From<&CommandLine> for CommandLineOutput {
    fn from(cmdline: &CommandLine) -> Self {
        Self {
            options: cmdline
                .options()
                .map(|(key, value)| OptionOutput {
                    key: key.to_owned(),
                    value: value.to_owned(),
                })
                .collect(),
            arguments: cmdline.arguments().to_vec(),
            args_file: cmdline.args_location().map(ToString::to_string),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code, e.g. `option_not_found`.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl From<&CommandLineError> for ErrorOutput {
    fn from(err: &CommandLineError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
