//! Comparison engine: lockstep iteration over two line streams

mod tolerance;

use std::fmt;
use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::output::Reporter;
use crate::parser::{open_inputs, parse_value, LineStream};

pub use tolerance::ToleranceComparator;

/// One line pair whose values differ by more than epsilon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiffRecord {
    /// 1-based line number
    pub line: usize,
    pub value_a: f64,
    pub value_b: f64,
    /// `value_a - value_b`
    pub difference: f64,
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} due  {}  -  {}",
            self.difference, self.value_a, self.value_b
        )
    }
}

/// Which input a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Outcome of a comparison loop
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of pairs reported as differences
    pub differences: usize,
    /// Number of line pairs read and compared
    pub lines_compared: usize,
    /// Set when one side still had a line after the other ran out. Only
    /// probed when equal lengths are required.
    pub unpaired: Option<Side>,
}

impl RunSummary {
    pub fn has_differences(&self) -> bool {
        self.differences > 0
    }
}

/// Main comparison engine
pub struct Comparator {
    tolerance: ToleranceComparator,
    require_equal_length: bool,
}

impl Comparator {
    pub fn new(config: &Config) -> Self {
        Self {
            tolerance: ToleranceComparator::new(config.epsilon),
            require_equal_length: config.require_equal_length,
        }
    }

    /// Read both streams one line at a time until either runs out.
    ///
    /// Stream B is only advanced when stream A produced a line. Each
    /// difference goes to `reporter` as soon as it is found. The first line
    /// that does not parse ends the comparison with an error.
    pub fn compare<A: BufRead, B: BufRead>(
        &self,
        stream_a: &mut LineStream<A>,
        stream_b: &mut LineStream<B>,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            let Some(text_a) = stream_a.next_line() else {
                if self.require_equal_length && stream_b.next_line().is_some() {
                    summary.unpaired = Some(Side::B);
                }
                break;
            };
            let Some(text_b) = stream_b.next_line() else {
                if self.require_equal_length {
                    summary.unpaired = Some(Side::A);
                }
                break;
            };
            let line = stream_a.line_number();

            let value_a = parse_value(&text_a).map_err(|source| CompareError::ParseA {
                line,
                text: text_a.clone(),
                source,
            })?;
            let value_b =
                parse_value(&text_b).map_err(|source| CompareError::ParseB { line, source })?;

            summary.lines_compared += 1;
            if let Some(record) = self.tolerance.check(line, value_a, value_b) {
                trace!(line, value_a, value_b, "difference");
                reporter.difference(&record)?;
                summary.differences += 1;
            }
        }

        debug!(
            lines = summary.lines_compared,
            differences = summary.differences,
            "comparison finished"
        );
        Ok(summary)
    }
}

/// Surface a read error from either stream. Stream A is checked first.
pub fn report_stream_errors<A: BufRead, B: BufRead>(
    stream_a: &mut LineStream<A>,
    stream_b: &mut LineStream<B>,
) -> Result<()> {
    if let Some(err) = stream_a.take_error() {
        return Err(err);
    }
    if let Some(err) = stream_b.take_error() {
        return Err(err);
    }
    Ok(())
}

/// Compare two already-open streams and emit the closing summary.
pub fn compare_streams<A: BufRead, B: BufRead>(
    config: &Config,
    stream_a: &mut LineStream<A>,
    stream_b: &mut LineStream<B>,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    let comparator = Comparator::new(config);
    let summary = comparator.compare(stream_a, stream_b, reporter)?;

    reporter.summary(&summary, config)?;
    report_stream_errors(stream_a, stream_b)?;

    match summary.unpaired {
        Some(Side::A) => Err(CompareError::LengthMismatch {
            longer: stream_a.path().to_path_buf(),
            shorter: stream_b.path().to_path_buf(),
        }),
        Some(Side::B) => Err(CompareError::LengthMismatch {
            longer: stream_b.path().to_path_buf(),
            shorter: stream_a.path().to_path_buf(),
        }),
        None => Ok(summary),
    }
}

/// Open both files named in `config` and compare them.
///
/// The files are closed when this returns, on success or failure.
pub fn run(config: &Config, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    info!(
        file_a = %config.file_a.display(),
        file_b = %config.file_b.display(),
        epsilon = config.epsilon,
        "comparing"
    );
    let (mut stream_a, mut stream_b) = open_inputs(&config.file_a, &config.file_b)?;
    compare_streams(config, &mut stream_a, &mut stream_b, reporter)
}
