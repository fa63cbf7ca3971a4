/// Errors raised while building a command line.
use thiserror::Error;

/// Fatal configuration errors. Token parsing itself never fails; only
/// locating and reading the args file can.
#[derive(Debug, Error)]
pub enum CommandLineError {
    /// The `args` location is not a well-formed URL.
    #[error("Malformed args file location '{location}': {source}")]
    MalformedLocation {
        /// The offending location string.
        location: String,
        #[source]
        source: url::ParseError,
    },

    /// A local args file could not be opened or read to completion.
    #[error("Arguments could not be read from [{location}]: {source}")]
    Read {
        /// Location of the args file.
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// A remote args file could not be fetched.
    #[error("Arguments could not be read from [{location}]: {source}")]
    Http {
        /// Location of the args file.
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// The location uses a scheme we cannot read from.
    #[error("Arguments could not be read from [{location}]: unsupported scheme '{scheme}'")]
    UnsupportedScheme {
        /// Location of the args file.
        location: String,
        /// The URL scheme.
        scheme: String,
    },

    /// A looked-up option is not present.
    #[error("No option named '{key}'")]
    OptionNotFound {
        /// The requested key.
        key: String,
    },
}

impl CommandLineError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedLocation { .. } => 2,
            Self::Read { .. } | Self::Http { .. } | Self::UnsupportedScheme { .. } => 3,
            Self::OptionNotFound { .. } => 4,
        }
    }

    /// Machine-readable error code, e.g. `option_not_found`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedLocation { .. } => "malformed_location",
            Self::Read { .. } | Self::Http { .. } | Self::UnsupportedScheme { .. } => {
                "args_file_unreadable"
            }
            Self::OptionNotFound { .. } => "option_not_found",
        }
    }
}
