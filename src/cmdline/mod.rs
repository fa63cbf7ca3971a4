//! Command-line model: options (`--key[=value]`) and positional arguments,
//! optionally merged with the lines of an args file.
pub mod errors;
pub mod source;
pub mod token;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

pub use errors::CommandLineError;
use token::{Binding, Token};

/// Option holding the location of the args file.
pub const ARGS_OPTION: &str = "args";

/// A parsed command line. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    options: BTreeMap<String, String>,
    arguments: Vec<String>,
    args_location: Option<Url>,
}

impl CommandLine {
    /// Parse `raw`, picking up `runner.args` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`CommandLine::parse_in`].
    pub fn parse<I, S>(raw: I) -> Result<Self, CommandLineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_in(raw, Path::new("."))
    }

    /// Parse `raw`, resolving the default args file and relative `--args`
    /// locations against `base_dir`.
    ///
    /// Options from `raw` take precedence over those read from the args file.
    ///
    /// # Errors
    ///
    /// Returns `CommandLineError` when the args location is malformed or the
    /// file cannot be read. No partial result is produced.
    pub fn parse_in<I, S>(raw: I, base_dir: &Path) -> Result<Self, CommandLineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base_dir = absolute(base_dir);
        let mut cmdline = Self::default();
        cmdline.merge(raw);

        let Some(url) = source::resolve_location(cmdline.option(ARGS_OPTION), &base_dir)? else {
            return Ok(cmdline);
        };
        let lines = source::fetch_lines(&url)?;
        info!(location = %url, lines = lines.len(), "loaded args file");
        cmdline.merge(lines);
        cmdline.args_location = Some(url);
        Ok(cmdline)
    }

    /// Look up an option value by exact key.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// All options, ordered by key.
    #[must_use]
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Positional arguments in first-seen order, without duplicates.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The args file that was merged in, if any.
    #[must_use]
    pub fn args_location(&self) -> Option<&Url> {
        self.args_location.as_ref()
    }

    fn merge<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in raw {
            match token::classify(arg.as_ref()) {
                Token::Option(binding) => self.bind(binding),
                Token::Argument(arg) => self.push_argument(arg),
                Token::Empty => debug!("skipping empty option token"),
            }
        }
    }

    /// First binding wins. A negated flag is also dropped when its literal
    /// form (`noStart`) is already set.
    fn bind(&mut self, binding: Binding) {
        let Binding {
            key,
            literal,
            value,
        } = binding;
        if let Some(existing) = self
            .options
            .get(&literal)
            .or_else(|| self.options.get(&key))
        {
            debug!(%key, %literal, %existing, dropped = %value, "option already set");
            return;
        }
        self.options.insert(key, value);
    }

    fn push_argument(&mut self, arg: String) {
        if self.arguments.contains(&arg) {
            debug!(%arg, "duplicate argument dropped");
            return;
        }
        self.arguments.push(arg);
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arguments: ")?;
        for arg in &self.arguments {
            write!(f, "[{arg}]")?;
        }
        f.write_str("Options: ")?;
        for (key, value) in &self.options {
            write!(f, "[{key}={value}]")?;
        }
        Ok(())
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
