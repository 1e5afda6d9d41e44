//! Colored terminal output

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::config::Config;
use crate::diff::{DiffRecord, RunSummary};
use crate::error::CompareError;

use super::color::{alert, success, ColorGuard};
use super::Reporter;

/// Plain-text reporter. Differences and errors are bold red, the all-clear
/// line is bold green.
pub struct TerminalReporter<W: WriteColor> {
    out: ColorGuard<W>,
}

impl<W: WriteColor> TerminalReporter<W> {
    /// Takes the writer and switches it to the alert color until dropped
    pub fn new(writer: W) -> io::Result<Self> {
        Ok(Self {
            out: ColorGuard::new(writer, &alert())?,
        })
    }
}

impl<W: WriteColor> Reporter for TerminalReporter<W> {
    fn difference(&mut self, record: &DiffRecord) -> io::Result<()> {
        writeln!(self.out, "{}", record)
    }

    fn summary(&mut self, summary: &RunSummary, config: &Config) -> io::Result<()> {
        if summary.has_differences() {
            return Ok(());
        }
        self.out.set(&success())?;
        writeln!(
            self.out,
            "No differences found between {} and {} that is larger than {:.10}",
            config.file_a.display(),
            config.file_b.display(),
            config.epsilon
        )?;
        self.out.set(&alert())
    }

    fn error(&mut self, error: &CompareError) -> io::Result<()> {
        match error {
            CompareError::ParseA { text, source, .. } => {
                self.out.clear()?;
                writeln!(
                    self.out,
                    "numdiff is strictly for numerical comparisons but the given file \
                     contains non-numerical content such as {:?}",
                    text
                )?;
                self.out.set(&alert())?;
                writeln!(self.out, "Error: {}", source)
            }
            other => {
                self.out.set(&alert())?;
                writeln!(self.out, "Error: {}", other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use termcolor::Buffer;

    fn config() -> Config {
        Config::new(PathBuf::from("ref.txt"), PathBuf::from("out.txt")).with_epsilon(0.0001)
    }

    fn render(f: impl FnOnce(&mut TerminalReporter<&mut Buffer>)) -> String {
        let mut buf = Buffer::no_color();
        {
            let mut reporter = TerminalReporter::new(&mut buf).unwrap();
            f(&mut reporter);
        }
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_difference_line() {
        let out = render(|r| {
            r.difference(&DiffRecord {
                line: 3,
                value_a: 2.5,
                value_b: 1.0,
                difference: 1.5,
            })
            .unwrap();
        });
        assert_eq!(out, "1.5 due  2.5  -  1\n");
    }

    #[test]
    fn test_no_differences_message() {
        let out = render(|r| r.summary(&RunSummary::default(), &config()).unwrap());
        assert_eq!(
            out,
            "No differences found between ref.txt and out.txt that is larger than 0.0001000000\n"
        );
    }

    #[test]
    fn test_summary_silent_when_differences_found() {
        let summary = RunSummary {
            differences: 2,
            lines_compared: 5,
            unpaired: None,
        };
        assert_eq!(render(|r| r.summary(&summary, &config()).unwrap()), "");
    }

    #[test]
    fn test_parse_error_in_a_quotes_text() {
        let source = "abc".parse::<f64>().unwrap_err();
        let error = CompareError::ParseA {
            line: 1,
            text: "abc".into(),
            source,
        };
        let out = render(|r| r.error(&error).unwrap());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("non-numerical content such as \"abc\""));
        assert!(lines[1].starts_with("Error: "));
    }

    #[test]
    fn test_parse_error_in_b_is_generic() {
        let source = "xyz".parse::<f64>().unwrap_err();
        let error = CompareError::ParseB { line: 1, source };
        let out = render(|r| r.error(&error).unwrap());
        assert_eq!(out, "Error: invalid float literal\n");
    }

    #[test]
    fn test_colors_are_reset() {
        let mut buf = Buffer::ansi();
        {
            let mut reporter = TerminalReporter::new(&mut buf).unwrap();
            reporter.summary(&RunSummary::default(), &config()).unwrap();
        }
        let out = String::from_utf8(buf.into_inner()).unwrap();
        // green for the summary line
        assert!(out.contains("\x1b[32mNo differences found"));
        assert!(out.ends_with("\x1b[0m"));
    }
}
