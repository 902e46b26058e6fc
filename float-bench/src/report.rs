//! Report module: phase timings and the end-of-run summary.

use crate::verify::Verification;
use std::path::PathBuf;
use std::time::Duration;

/// Timing for one bulk phase (populate or transform).
#[derive(Debug, Clone)]
pub struct PhaseTiming {
    pub name: &'static str,
    pub rows: usize,
    pub elapsed: Duration,
}

impl PhaseTiming {
    pub fn new(name: &'static str, rows: usize, elapsed: Duration) -> Self {
        Self {
            name,
            rows,
            elapsed,
        }
    }

    pub fn rows_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.rows as f64 / secs
    }

    /// Mean time per row in microseconds.
    pub fn mean_row_us(&self) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e6 / self.rows as f64
    }
}

/// Outcome of one full pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub db_path: PathBuf,
    pub row_count: u64,
    pub populate: PhaseTiming,
    pub transform: PhaseTiming,
    pub verification: Verification,
}

impl RunReport {
    pub fn total_elapsed(&self) -> Duration {
        self.populate.elapsed + self.transform.elapsed
    }
}

/// Print a formatted summary of the run.
pub fn print_summary(report: &RunReport) {
    println!("\n{}", "=".repeat(72));
    println!("  SQLite Bulk Write Benchmark Report");
    println!("  Database: {}", report.db_path.display());
    println!("{}", "=".repeat(72));

    println!(
        "  {:12} {:>12} {:>12} {:>14} {:>12}",
        "Phase", "Rows", "Time (s)", "Rows/s", "µs/row"
    );
    println!("  {}", "-".repeat(66));
    for phase in [&report.populate, &report.transform] {
        println!(
            "  {:12} {:>12} {:>12.2} {:>14.0} {:>12.3}",
            phase.name,
            phase.rows,
            phase.elapsed.as_secs_f64(),
            phase.rows_per_sec(),
            phase.mean_row_us(),
        );
    }
    println!("  {}", "-".repeat(66));
    println!(
        "  Total:          {:>10.2}s",
        report.total_elapsed().as_secs_f64()
    );
    println!("  Rows in table:  {:>10}", report.row_count);

    let v = &report.verification;
    let verdict = if v.is_consistent() { "PASS" } else { "FAIL" };
    println!(
        "  Verification:   {:>10}  ({} rows, {} mismatches, max error {:.3e})",
        verdict, v.rows_checked, v.mismatches, v.max_error
    );

    println!("{}\n", "=".repeat(72));
}
