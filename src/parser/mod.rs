//! Input layer: opening the two files and turning lines into numbers

mod stream;

use std::fs::File;
use std::io::BufReader;
use std::num::ParseFloatError;
use std::path::Path;

use tracing::debug;

use crate::error::{CompareError, Result};

pub use self::stream::LineStream;

/// A line source backed by a file on disk
pub type FileStream = LineStream<BufReader<File>>;

/// Open a single input file.
pub fn open_input(path: &Path) -> Result<FileStream> {
    let file = File::open(path).map_err(|source| CompareError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened input");
    Ok(LineStream::new(path, BufReader::new(file)))
}

/// Open both inputs. If the second one fails the first is dropped (and
/// closed) before the error is returned.
pub fn open_inputs(path_a: &Path, path_b: &Path) -> Result<(FileStream, FileStream)> {
    let stream_a = open_input(path_a)?;
    let stream_b = open_input(path_b)?;
    Ok((stream_a, stream_b))
}

/// Parse one line as a 64-bit float.
///
/// The text is taken as-is: surrounding whitespace is not trimmed, so `" 1.0"`
/// is rejected just like `"abc"`.
pub fn parse_value(text: &str) -> std::result::Result<f64, ParseFloatError> {
    text.parse::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("1.0"), Ok(1.0));
        assert_eq!(parse_value("-2.5e-3"), Ok(-0.0025));
        assert_eq!(parse_value("+7"), Ok(7.0));
        assert_eq!(parse_value(".5"), Ok(0.5));
        assert!(parse_value("abc").is_err());
        assert!(parse_value("").is_err());
        assert!(parse_value(" 1.0").is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = open_input(&missing).unwrap_err();
        assert!(matches!(err, CompareError::FileOpen { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_open_inputs_second_missing() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        writeln!(a, "1").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("b.txt");

        let err = open_inputs(a.path(), &missing).unwrap_err();
        match err {
            CompareError::FileOpen { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
