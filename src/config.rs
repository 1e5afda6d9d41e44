//! Configuration handling for numdiff

use std::path::PathBuf;

/// Default tolerance used when `-e` is not given
pub const DEFAULT_EPSILON: f64 = 0.000_000_000_1;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// When to emit colored output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// First file (A)
    pub file_a: PathBuf,
    /// Second file (B)
    pub file_b: PathBuf,
    /// Differences larger than this are reported
    pub epsilon: f64,
    /// Output format
    pub output_format: OutputFormat,
    /// Color mode for terminal output
    pub color: ColorMode,
    /// Fail when one file has lines left after the other ends
    pub require_equal_length: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_a: PathBuf::new(),
            file_b: PathBuf::new(),
            epsilon: DEFAULT_EPSILON,
            output_format: OutputFormat::default(),
            color: ColorMode::default(),
            require_equal_length: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(file_a: PathBuf, file_b: PathBuf) -> Self {
        Self {
            file_a,
            file_b,
            ..Default::default()
        }
    }

    /// Set the tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set color mode
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Require both files to have the same number of lines
    pub fn with_require_equal_length(mut self, require: bool) -> Self {
        self.require_equal_length = require;
        self
    }
}

/// Parse and validate an epsilon argument.
///
/// Accepts anything `f64::from_str` does, as long as the result is finite and
/// not negative.
pub fn parse_epsilon(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|e| format!("invalid epsilon {:?}: {}", s, e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "epsilon must be a finite, non-negative number, got {}",
            s
        ));
    }
    Ok(value)
}
