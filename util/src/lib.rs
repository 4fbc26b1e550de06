use std::io::{self, BufRead};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set. Keeps stdout reserved for the answer.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`]. Fails if a global subscriber
/// is already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
}

pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines()
}

/// Lines of stdin, keeping read errors so callers can stop on the first one.
pub fn stdin_lines() -> impl Iterator<Item = io::Result<String>> {
    read_lines(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case("", vec![])]
    #[case("abc", vec!["abc"])]
    #[case("a1b\n\nc2d\n", vec!["a1b", "", "c2d"])]
    #[case("crlf\r\nline", vec!["crlf", "line"])]
    fn read_lines_ok(#[case] input: &str, #[case] expected: Vec<&str>) {
        let lines = read_lines(Cursor::new(input)).collect::<io::Result<Vec<_>>>();

        assert!(lines.is_ok());

        assert_eq!(lines.unwrap(), expected);
    }

    #[test]
    fn read_lines_invalid_utf8() {
        let mut lines = read_lines(Cursor::new(b"ok\n\xff\xfe\n".to_vec()));

        assert_eq!(lines.next().unwrap().unwrap(), "ok");
        assert!(lines.next().unwrap().is_err());
    }

    #[test]
    fn init_logging_only_once() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_err());
    }
}
