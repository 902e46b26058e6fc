//! Schema setup for the `floats` table.
//!
//! One table, three REAL columns, no primary key, no indexes. Rows are
//! addressed by SQLite's implicit `rowid`.

use anyhow::{Context, Result};
use rusqlite::Connection;

pub const TABLE_NAME: &str = "floats";

/// One stored triple. `col1` is derived, `col2` and `col3` are inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRow {
    pub col1: f64,
    pub col2: f64,
    pub col3: f64,
}

/// Drop any existing `floats` table and create an empty one.
///
/// Runs in autocommit mode, so the reset is committed when this returns.
pub fn create_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS floats;
         CREATE TABLE floats (
             col1 REAL,
             col2 REAL,
             col3 REAL
         );",
    )
    .context("failed to recreate floats table")?;
    Ok(())
}

pub fn row_count(conn: &Connection) -> Result<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM floats", [], |r| r.get(0))
        .context("failed to count rows")?;
    Ok(count as u64)
}

/// Read all rows in rowid order as `(rowid, row)`.
pub fn read_all(conn: &Connection) -> Result<Vec<(i64, FloatRow)>> {
    let mut stmt = conn.prepare("SELECT rowid, col1, col2, col3 FROM floats ORDER BY rowid")?;
    let rows = stmt
        .query_map([], |r| {
            Ok((
                r.get(0)?,
                FloatRow {
                    col1: r.get(1)?,
                    col2: r.get(2)?,
                    col3: r.get(3)?,
                },
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read rows")?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_table_discards_prior_rows() {
        let conn = Connection::open_in_memory().unwrap();
        create_table(&conn).unwrap();
        conn.execute(
            "INSERT INTO floats (col1, col2, col3) VALUES (1.0, 2.0, 3.0)",
            [],
        )
        .unwrap();
        assert_eq!(row_count(&conn).unwrap(), 1);

        create_table(&conn).unwrap();
        assert_eq!(row_count(&conn).unwrap(), 0);
    }

    #[test]
    fn table_has_exactly_three_real_columns() {
        let conn = Connection::open_in_memory().unwrap();
        create_table(&conn).unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(floats)").unwrap();
        let columns: Vec<(String, String, i64)> = stmt
            .query_map([], |r| Ok((r.get(1)?, r.get(2)?, r.get(5)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ("col1".to_string(), "REAL".to_string(), 0),
                ("col2".to_string(), "REAL".to_string(), 0),
                ("col3".to_string(), "REAL".to_string(), 0),
            ]
        );
    }
}
