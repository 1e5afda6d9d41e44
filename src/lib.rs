//! numdiff - Line-by-line numeric diff
//!
//! Compares two files holding one number per line and reports every line
//! pair whose values differ by more than a tolerance (epsilon).

pub mod config;
pub mod diff;
pub mod error;
pub mod output;
pub mod parser;

pub use config::Config;
pub use diff::{DiffRecord, RunSummary};
pub use error::CompareError;
