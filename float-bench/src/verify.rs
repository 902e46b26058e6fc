//! Post-transform consistency check.

use crate::transform::compute_col1;
use anyhow::{Context, Result};
use rusqlite::Connection;

/// Relative tolerance used when comparing stored and recomputed `col1`.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Verification {
    pub rows_checked: u64,
    pub mismatches: u64,
    /// Largest relative error seen (absolute error where the expected value is zero).
    pub max_error: f64,
}

impl Verification {
    pub fn is_consistent(&self) -> bool {
        self.mismatches == 0
    }
}

/// Error between a stored and an expected value: relative, or absolute when
/// `expected` is zero.
pub fn value_error(stored: f64, expected: f64) -> f64 {
    let diff = (stored - expected).abs();
    if expected == 0.0 {
        diff
    } else {
        diff / expected.abs()
    }
}

/// Check every row's `col1` against `compute_col1(col2, col3)`.
pub fn verify_transformed(conn: &Connection, tolerance: f64) -> Result<Verification> {
    let mut stmt = conn.prepare("SELECT col1, col2, col3 FROM floats")?;
    let mut rows = stmt.query([])?;
    let mut result = Verification::default();

    while let Some(row) = rows.next().context("failed to read row for verification")? {
        let col1: f64 = row.get(0)?;
        let col2: f64 = row.get(1)?;
        let col3: f64 = row.get(2)?;

        let err = value_error(col1, compute_col1(col2, col3));
        if err > tolerance {
            result.mismatches += 1;
        }
        result.max_error = result.max_error.max(err);
        result.rows_checked += 1;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_is_relative_for_nonzero() {
        assert!((value_error(1.1, 1.0) - 0.1).abs() < 1e-12);
        assert!((value_error(-2.2, -2.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn value_error_is_absolute_for_zero() {
        assert_eq!(value_error(0.0, 0.0), 0.0);
        assert_eq!(value_error(0.5, 0.0), 0.5);
    }

    #[test]
    fn empty_verification_is_consistent() {
        assert!(Verification::default().is_consistent());
    }
}
