//! Threshold rule for a single pair of values

use super::DiffRecord;

/// Decides whether two values differ by more than epsilon
#[derive(Debug, Clone, Copy)]
pub struct ToleranceComparator {
    epsilon: f64,
}

impl ToleranceComparator {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// `|a - b| > epsilon`. A gap of exactly epsilon is a match. NaN on
    /// either side never counts as a difference.
    pub fn exceeds(&self, a: f64, b: f64) -> bool {
        (a - b).abs() > self.epsilon
    }

    /// Build the record for `line` if the pair is a difference
    pub fn check(&self, line: usize, value_a: f64, value_b: f64) -> Option<DiffRecord> {
        if self.exceeds(value_a, value_b) {
            Some(DiffRecord {
                line,
                value_a,
                value_b,
                difference: value_a - value_b,
            })
        } else {
            None
        }
    }
}
