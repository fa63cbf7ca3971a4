//! Classification of raw command-line tokens into options and arguments.

/// Prefix that marks a token as an option.
pub const OPTION_PREFIX: &str = "--";

/// Prefix that turns a bare flag into a `false` value for the remaining key.
const NEGATION_PREFIX: &str = "no";

/// A single classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `--key`, `--noKey` or `--key=value`, resolved to its final binding.
    Option(Binding),
    /// A positional argument, kept verbatim.
    Argument(String),
    /// An option token with nothing after the prefix (e.g. `--` or `--  `).
    Empty,
}

/// An option binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Key the value is stored under (`start` for `--noStart`).
    pub key: String,
    /// Key as written (`noStart` for `--noStart`). Equal to `key` unless negated.
    pub literal: String,
    /// Bound value.
    pub value: String,
}

impl Binding {
    fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            literal: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Classify a raw token.
#[must_use]
pub fn classify(raw: &str) -> Token {
    match raw.strip_prefix(OPTION_PREFIX) {
        Some(rest) => parse_option(rest).map_or(Token::Empty, Token::Option),
        None => Token::Argument(raw.to_owned()),
    }
}

/// Parse the part of an option token after `--`.
///
/// Returns `None` when nothing but whitespace follows the prefix.
#[must_use]
pub fn parse_option(body: &str) -> Option<Binding> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Some((key, value)) = body.split_once('=') {
        return Some(Binding::new(key, value));
    }

    Some(match negated_key(body) {
        Some(key) => Binding {
            key,
            literal: body.to_owned(),
            value: "false".to_owned(),
        },
        None => Binding::new(body, "true"),
    })
}

/// `noStart` -> `start`. Only the first character after `no` is lowercased.
fn negated_key(flag: &str) -> Option<String> {
    let rest = flag.strip_prefix(NEGATION_PREFIX)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    let mut key: String = first.to_lowercase().collect();
    key.push_str(chars.as_str());
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(key: &str, value: &str) -> Token {
        Token::Option(Binding::new(key, value))
    }

    fn negated(key: &str, literal: &str) -> Token {
        Token::Option(Binding {
            key: key.to_owned(),
            literal: literal.to_owned(),
            value: "false".to_owned(),
        })
    }

    #[test]
    fn test_flag_is_true() {
        assert_eq!(classify("--debug"), opt("debug", "true"));
    }

    #[test]
    fn test_negated_flag() {
        assert_eq!(classify("--noStart"), negated("start", "noStart"));
        assert_eq!(classify("--noVerbose"), negated("verbose", "noVerbose"));
    }

    #[test]
    fn test_negated_single_char() {
        assert_eq!(classify("--noX"), negated("x", "noX"));
    }

    #[test]
    fn test_plain_no_is_a_flag() {
        assert_eq!(classify("--no"), opt("no", "true"));
    }

    #[test]
    fn test_negation_keeps_rest_of_key() {
        // Lowercase only touches the character right after "no".
        assert_eq!(classify("--noHTTPProxy"), negated("hTTPProxy", "noHTTPProxy"));
        assert_eq!(classify("--notes"), negated("tes", "notes"));
    }

    #[test]
    fn test_explicit_value() {
        assert_eq!(classify("--profile=dev"), opt("profile", "dev"));
    }

    #[test]
    fn test_value_split_on_first_equals() {
        assert_eq!(classify("--define=a=b"), opt("define", "a=b"));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(classify("--x="), opt("x", ""));
    }

    #[test]
    fn test_explicit_value_never_negated() {
        assert_eq!(classify("--noStart=yes"), opt("noStart", "yes"));
    }

    #[test]
    fn test_body_is_trimmed() {
        assert_eq!(classify("--  debug  "), opt("debug", "true"));
        assert_eq!(classify("-- a = b "), opt("a ", " b"));
    }

    #[test]
    fn test_empty_option() {
        assert_eq!(classify("--"), Token::Empty);
        assert_eq!(classify("--   "), Token::Empty);
    }

    #[test]
    fn test_argument() {
        assert_eq!(classify("target"), Token::Argument("target".to_owned()));
        assert_eq!(classify("-v"), Token::Argument("-v".to_owned()));
    }
}
