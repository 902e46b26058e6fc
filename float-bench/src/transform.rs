//! Bulk transform: recompute `col1` from `col2` and `col3` for every row.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

/// `col1 = col2 * 3.0 * sin(5.0 * col3)` in plain double precision.
pub fn compute_col1(col2: f64, col3: f64) -> f64 {
    col2 * 3.0 * (5.0 * col3).sin()
}

/// Read `(rowid, col2, col3)` for every row.
pub fn read_inputs(conn: &Connection) -> Result<Vec<(i64, f64, f64)>> {
    let mut stmt = conn.prepare("SELECT rowid, col2, col3 FROM floats")?;
    let rows = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read transform inputs")?;
    Ok(rows)
}

/// Compute the `(col1, rowid)` update pairs for the given inputs.
pub fn compute_updates(inputs: &[(i64, f64, f64)]) -> Vec<(f64, i64)> {
    inputs
        .iter()
        .map(|&(rowid, col2, col3)| (compute_col1(col2, col3), rowid))
        .collect()
}

/// Apply `(col1, rowid)` pairs in a single transaction and commit.
///
/// Returns the number of rows changed.
pub fn apply_updates(conn: &mut Connection, updates: &[(f64, i64)]) -> Result<usize> {
    let tx = conn.transaction().context("failed to begin update transaction")?;
    let mut changed = 0usize;
    {
        let mut stmt = tx.prepare("UPDATE floats SET col1 = ?1 WHERE rowid = ?2")?;
        for &(col1, rowid) in updates {
            changed += stmt
                .execute(params![col1, rowid])
                .with_context(|| format!("failed to update rowid {rowid}"))?;
        }
    }
    tx.commit().context("failed to commit updates")?;
    Ok(changed)
}

/// Read, compute and write back. Only `col1` is touched.
pub fn transform(conn: &mut Connection) -> Result<usize> {
    let inputs = read_inputs(conn)?;
    log::debug!("Read {} rows for transform", inputs.len());
    let updates = compute_updates(&inputs);
    apply_updates(conn, &updates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_col1_known_values() {
        assert!((compute_col1(0.5, 0.2) - 0.5 * 3.0 * 1.0f64.sin()).abs() < 1e-12);
        assert_eq!(compute_col1(1.0, 0.0), 0.0);
        assert_eq!(compute_col1(0.0, 0.9), 0.0);
    }

    #[test]
    fn compute_updates_keeps_rowids() {
        let updates = compute_updates(&[(7, 1.0, 0.1), (3, 0.25, 0.5)]);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].1, 7);
        assert_eq!(updates[1].1, 3);
        assert_eq!(updates[1].0, 0.25 * 3.0 * 2.5f64.sin());
    }
}
