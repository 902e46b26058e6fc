//! Data population: generates random triples and bulk-inserts them.
//!
//! All rows go through one prepared statement inside one transaction, so the
//! insert is all-or-nothing and per-statement overhead is paid once.

use crate::schema::FloatRow;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::{params, Connection};

/// Lazily generate `count` rows with every field drawn uniformly from `[0, 1)`.
///
/// Fields are drawn in `col1, col2, col3` order. `col1` is a placeholder
/// that the transform step overwrites.
pub fn generate_rows<R: Rng>(count: usize, rng: &mut R) -> impl Iterator<Item = FloatRow> + '_ {
    (0..count).map(move |_| FloatRow {
        col1: rng.gen::<f64>(),
        col2: rng.gen::<f64>(),
        col3: rng.gen::<f64>(),
    })
}

/// Insert every row in a single transaction and commit.
///
/// Returns the number of rows inserted. If any insert fails the transaction
/// is dropped uncommitted and no rows are written.
pub fn insert_rows<I>(conn: &mut Connection, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = FloatRow>,
{
    let tx = conn.transaction().context("failed to begin insert transaction")?;
    let mut inserted = 0usize;
    {
        let mut stmt = tx.prepare("INSERT INTO floats (col1, col2, col3) VALUES (?1, ?2, ?3)")?;
        for row in rows {
            stmt.execute(params![row.col1, row.col2, row.col3])
                .context("failed to insert row")?;
            inserted += 1;
        }
    }
    tx.commit().context("failed to commit inserts")?;
    Ok(inserted)
}

/// Build the generator RNG: fixed seed when given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate and insert `count` rows.
pub fn populate(conn: &mut Connection, count: usize, seed: Option<u64>) -> Result<usize> {
    let mut rng = make_rng(seed);
    insert_rows(conn, generate_rows(count, &mut rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_values_are_unit_interval() {
        let mut rng = make_rng(Some(7));
        let rows: Vec<FloatRow> = generate_rows(1_000, &mut rng).collect();
        assert_eq!(rows.len(), 1_000);
        for row in &rows {
            for v in [row.col1, row.col2, row.col3] {
                assert!((0.0..1.0).contains(&v), "value {v} outside [0, 1)");
            }
        }
    }

    #[test]
    fn same_seed_same_rows() {
        let a: Vec<FloatRow> = generate_rows(50, &mut make_rng(Some(42))).collect();
        let b: Vec<FloatRow> = generate_rows(50, &mut make_rng(Some(42))).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_rows_generates_nothing() {
        let mut rng = make_rng(None);
        assert_eq!(generate_rows(0, &mut rng).count(), 0);
    }
}
