/// Locating and reading the auxiliary args file.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;
use url::Url;

use super::errors::CommandLineError;

/// Name of the args file picked up from the base directory when no
/// `--args` option is given.
pub const DEFAULT_ARGS_FILE_NAME: &str = "runner.args";

/// Work out which args file to read, if any.
///
/// An explicit `--args` value always wins. Otherwise `runner.args` in
/// `base_dir` is used when it exists. `base_dir` must be absolute.
///
/// # Errors
///
/// Returns `CommandLineError::MalformedLocation` when the explicit
/// location is not a valid URL.
pub fn resolve_location(
    explicit: Option<&str>,
    base_dir: &Path,
) -> Result<Option<Url>, CommandLineError> {
    if let Some(location) = explicit {
        return parse_location(location, base_dir).map(Some);
    }

    let default_file = base_dir.join(DEFAULT_ARGS_FILE_NAME);
    if !default_file.is_file() {
        debug!(path = %default_file.display(), "no default args file");
        return Ok(None);
    }
    match Url::from_file_path(&default_file) {
        Ok(url) => Ok(Some(url)),
        Err(()) => {
            debug!(path = %default_file.display(), "default args file has no file URL");
            Ok(None)
        }
    }
}

/// Parse a location string into a URL.
///
/// Strings without a scheme are taken as paths relative to `base_dir`.
///
/// # Errors
///
/// Returns `CommandLineError::MalformedLocation` on any other URL syntax error.
pub fn parse_location(location: &str, base_dir: &Path) -> Result<Url, CommandLineError> {
    match Url::parse(location) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::from_file_path(base_dir.join(location))
            .map_err(|()| CommandLineError::MalformedLocation {
                location: location.to_owned(),
                source: url::ParseError::RelativeUrlWithoutBase,
            }),
        Err(source) => Err(CommandLineError::MalformedLocation {
            location: location.to_owned(),
            source,
        }),
    }
}

/// Fetch the args file at `url` and return its non-blank lines in order.
///
/// # Errors
///
/// Returns a read, HTTP or unsupported-scheme error naming the location.
pub fn fetch_lines(url: &Url) -> Result<Vec<String>, CommandLineError> {
    let location = url.as_str();
    match url.scheme() {
        "file" => {
            let path = url.to_file_path().map_err(|()| CommandLineError::Read {
                location: location.to_owned(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "URL does not name a local file",
                ),
            })?;
            let file = File::open(&path).map_err(|source| CommandLineError::Read {
                location: location.to_owned(),
                source,
            })?;
            read_lines(file, location)
        }
        "http" | "https" => {
            let response = reqwest::blocking::Client::builder()
                .timeout(None)
                .build()
                .and_then(|client| client.get(url.clone()).send())
                .and_then(reqwest::blocking::Response::error_for_status)
                .map_err(|source| CommandLineError::Http {
                    location: location.to_owned(),
                    source,
                })?;
            read_lines(response, location)
        }
        scheme => Err(CommandLineError::UnsupportedScheme {
            location: location.to_owned(),
            scheme: scheme.to_owned(),
        }),
    }
}

/// Read `reader` to the end, one token per line, skipping blank lines.
///
/// The reader is dropped before returning on every path.
fn read_lines<R: Read>(reader: R, location: &str) -> Result<Vec<String>, CommandLineError> {
    BufReader::new(reader)
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CommandLineError::Read {
            location: location.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_skips_blank() {
        let input = "--color\n\n   \ntarget\r\n\t\n--x=1";
        let lines = read_lines(input.as_bytes(), "mem").unwrap();
        assert_eq!(lines, vec!["--color", "target", "--x=1"]);
    }

    #[test]
    fn test_read_lines_keeps_line_verbatim() {
        let lines = read_lines("  a b  \n".as_bytes(), "mem").unwrap();
        assert_eq!(lines, vec!["  a b  "]);
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let result = read_lines(&[0xff, 0xfe, b'\n'][..], "mem");
        assert!(matches!(result, Err(CommandLineError::Read { .. })));
    }

    #[test]
    fn test_relative_location_is_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let url = parse_location("file.txt", dir.path()).unwrap();
        assert_eq!(url.scheme(), "file");
        assert_eq!(url.to_file_path().unwrap(), dir.path().join("file.txt"));
    }

    #[test]
    fn test_absolute_url_kept() {
        let url = parse_location("https://example.com/runner.args", Path::new("/")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/runner.args");
    }

    #[test]
    fn test_malformed_location() {
        let result = parse_location("http://[::1", Path::new("/"));
        match result {
            Err(CommandLineError::MalformedLocation { location, .. }) => {
                assert_eq!(location, "http://[::1");
            }
            other => panic!("expected malformed location, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_location_wins() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join(DEFAULT_ARGS_FILE_NAME)).unwrap();
        let url = resolve_location(Some("other.args"), dir.path())
            .unwrap()
            .unwrap();
        assert!(url.path().ends_with("/other.args"));
    }

    #[test]
    fn test_default_file_found() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join(DEFAULT_ARGS_FILE_NAME)).unwrap();
        let url = resolve_location(None, dir.path()).unwrap().unwrap();
        assert_eq!(
            url.to_file_path().unwrap(),
            dir.path().join(DEFAULT_ARGS_FILE_NAME)
        );
    }

    #[test]
    fn test_default_name_as_directory_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(DEFAULT_ARGS_FILE_NAME)).unwrap();
        assert!(resolve_location(None, dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_no_default_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_location(None, dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_fetch_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.args");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "--color").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "target").unwrap();
        drop(file);

        let url = Url::from_file_path(&path).unwrap();
        assert_eq!(fetch_lines(&url).unwrap(), vec!["--color", "target"]);
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("missing.args")).unwrap();
        match fetch_lines(&url) {
            Err(err @ CommandLineError::Read { .. }) => {
                assert!(err.to_string().contains("missing.args"));
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_unsupported_scheme() {
        let url = Url::parse("ftp://example.com/runner.args").unwrap();
        assert!(matches!(
            fetch_lines(&url),
            Err(CommandLineError::UnsupportedScheme { scheme, .. }) if scheme == "ftp"
        ));
    }
}
