//! JSON Lines output format

use std::io::{self, Write};

use serde::Serialize;

use crate::config::Config;
use crate::diff::{DiffRecord, RunSummary};
use crate::error::CompareError;

use super::Reporter;

/// Writes one JSON object per line
pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, record: &JsonRecord<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Serializable record for JSON output
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonRecord<'a> {
    Difference(&'a DiffRecord),
    Summary {
        file_a: String,
        file_b: String,
        epsilon: f64,
        lines_compared: usize,
        differences: usize,
    },
    Error {
        message: String,
    },
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn difference(&mut self, record: &DiffRecord) -> io::Result<()> {
        self.emit(&JsonRecord::Difference(record))
    }

    fn summary(&mut self, summary: &RunSummary, config: &Config) -> io::Result<()> {
        self.emit(&JsonRecord::Summary {
            file_a: config.file_a.display().to_string(),
            file_b: config.file_b.display().to_string(),
            epsilon: config.epsilon,
            lines_compared: summary.lines_compared,
            differences: summary.differences,
        })
    }

    fn error(&mut self, error: &CompareError) -> io::Result<()> {
        let message = match error {
            CompareError::ParseA { text, source, .. } => {
                format!("non-numerical content {:?}: {}", text, source)
            }
            other => other.to_string(),
        };
        self.emit(&JsonRecord::Error { message })
    }
}
