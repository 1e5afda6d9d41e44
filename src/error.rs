//! Error types for comparison runs

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure that ends a comparison run.
///
/// None of these are recoverable; the first one stops the run.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the first file is not a number
    #[error("line {line}: {text:?}: {source}")]
    ParseA {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// A line of the second file is not a number
    #[error("{source}")]
    ParseB {
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("reading {}: {source}", path.display())]
    StreamRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has more lines than {}", longer.display(), shorter.display())]
    LengthMismatch { longer: PathBuf, shorter: PathBuf },

    #[error("writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CompareError>;
