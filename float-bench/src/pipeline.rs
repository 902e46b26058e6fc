//! The full benchmark run: schema reset, populate, transform.
//!
//! Each step commits before the next starts. Progress and elapsed-time lines
//! go to stdout; diagnostics go through `log`.

use crate::config::BenchConfig;
use crate::populate::populate;
use crate::report::{PhaseTiming, RunReport};
use crate::schema::{create_table, row_count, TABLE_NAME};
use crate::transform::transform;
use crate::verify::{verify_transformed, DEFAULT_TOLERANCE};
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::time::Instant;

/// Open the database file, run every step, and close the connection.
///
/// On error the connection is dropped on the way out, which releases it.
pub fn run(config: &BenchConfig) -> Result<RunReport> {
    log::info!("Opening database {}", config.db_path.display());
    let mut conn = Connection::open(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;

    let report = run_on(&mut conn, config)?;

    conn.close()
        .map_err(|(_, e)| e)
        .context("failed to close database")?;
    log::info!("Closed database {}", config.db_path.display());

    Ok(report)
}

/// Run every step on an already-open connection.
pub fn run_on(conn: &mut Connection, config: &BenchConfig) -> Result<RunReport> {
    create_table(conn)?;
    log::info!("Recreated table {TABLE_NAME}");

    println!("Populating table with {} rows...", config.row_count);
    match config.seed {
        Some(seed) => log::debug!("Generating rows with seed {seed:#x}"),
        None => log::debug!("Generating rows with an entropy seed"),
    }
    let start = Instant::now();
    let inserted = populate(conn, config.row_count, config.seed)?;
    let populate_timing = PhaseTiming::new("populate", inserted, start.elapsed());
    println!(
        "Table populated in {:.2} seconds.",
        populate_timing.elapsed.as_secs_f64()
    );
    log::info!(
        "Inserted {inserted} rows ({:.0} rows/s)",
        populate_timing.rows_per_sec()
    );

    println!("Processing data...");
    let start = Instant::now();
    let updated = transform(conn)?;
    let transform_timing = PhaseTiming::new("transform", updated, start.elapsed());
    println!(
        "Data processed and updated in {:.2} seconds.",
        transform_timing.elapsed.as_secs_f64()
    );
    log::info!(
        "Updated {updated} rows ({:.0} rows/s)",
        transform_timing.rows_per_sec()
    );

    let rows = row_count(conn)?;
    let verification = verify_transformed(conn, DEFAULT_TOLERANCE)?;
    if verification.is_consistent() {
        log::info!(
            "Verified {} rows (max error {:.3e})",
            verification.rows_checked,
            verification.max_error
        );
    } else {
        log::warn!(
            "{} of {} rows do not match col2 * 3.0 * sin(5.0 * col3)",
            verification.mismatches,
            verification.rows_checked
        );
    }

    Ok(RunReport {
        db_path: config.db_path.clone(),
        row_count: rows,
        populate: populate_timing,
        transform: transform_timing,
        verification,
    })
}
