//! numdiff - Line-by-line numeric diff

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use numdiff::config::{parse_epsilon, ColorMode, Config, OutputFormat, DEFAULT_EPSILON};
use numdiff::diff;
use numdiff::output::ReporterFactory;
use numdiff::CompareError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Auto,
    Always,
    Never,
}

impl From<CliColor> for ColorMode {
    fn from(c: CliColor) -> Self {
        match c {
            CliColor::Auto => ColorMode::Auto,
            CliColor::Always => ColorMode::Always,
            CliColor::Never => ColorMode::Never,
        }
    }
}

/// Find numerical differences between two files holding one number per line
#[derive(Parser, Debug)]
#[command(name = "numdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First file (A)
    file_a: PathBuf,

    /// Second file (B)
    file_b: PathBuf,

    /// "Epsilon" threshold; smaller differences are ignored
    #[arg(short, long, value_name = "EPSILON", default_value_t = DEFAULT_EPSILON, value_parser = parse_epsilon)]
    epsilon: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// When to color terminal output
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColor,

    /// Fail if one file has more lines than the other
    #[arg(long)]
    require_equal_length: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::new(cli.file_a, cli.file_b)
        .with_epsilon(cli.epsilon)
        .with_output_format(cli.format.into())
        .with_color(cli.color.into())
        .with_require_equal_length(cli.require_equal_length);

    let mut reporter = ReporterFactory::create(&config).context("Failed to set up output")?;

    match diff::run(&config, reporter.as_mut()) {
        Ok(summary) => {
            info!(
                lines = summary.lines_compared,
                differences = summary.differences,
                "done"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(CompareError::Output(e)) => Err(e).context("Failed to write output"),
        Err(e) => {
            reporter
                .error(&e)
                .context("Failed to write error report")?;
            Ok(ExitCode::from(1))
        }
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
