//! Output formatting for comparison results

mod color;
mod json;
mod terminal;

use std::io::{self, IsTerminal};

use termcolor::{ColorChoice, StandardStream};

use crate::config::{ColorMode, Config, OutputFormat};
use crate::diff::{DiffRecord, RunSummary};
use crate::error::CompareError;

pub use color::ColorGuard;
pub use json::JsonReporter;
pub use terminal::TerminalReporter;

/// Receives results as the comparison produces them
pub trait Reporter {
    /// Called once per difference, as soon as it is found
    fn difference(&mut self, record: &DiffRecord) -> io::Result<()>;

    /// Called once after the comparison loop completes
    fn summary(&mut self, summary: &RunSummary, config: &Config) -> io::Result<()>;

    /// Called with the error that ended the run
    fn error(&mut self, error: &CompareError) -> io::Result<()>;
}

/// Factory for creating reporters
pub struct ReporterFactory;

impl ReporterFactory {
    /// Create a reporter writing to stdout, based on the configured format
    pub fn create(config: &Config) -> io::Result<Box<dyn Reporter>> {
        match config.output_format {
            OutputFormat::Terminal => {
                let stdout = StandardStream::stdout(color_choice(config.color));
                Ok(Box::new(TerminalReporter::new(stdout)?))
            }
            OutputFormat::Json => Ok(Box::new(JsonReporter::new(io::stdout().lock()))),
        }
    }
}

/// Map the CLI color mode onto termcolor. `Auto` turns color off when
/// stdout is not a terminal; termcolor itself handles `NO_COLOR` and
/// `TERM=dumb`.
pub fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}
