//! Run configuration.

use log::LevelFilter;
use std::path::PathBuf;

/// Database file the benchmark (re)creates on every run.
pub const DEFAULT_DB_PATH: &str = "test.db";

/// Rows generated per run.
pub const DEFAULT_ROW_COUNT: usize = 10_000_000;

/// Everything a single benchmark run needs to know.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub db_path: PathBuf,
    pub row_count: usize,
    /// Fixed RNG seed for reproducible data. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Threshold for log records printed to stderr.
    pub log_level: LevelFilter,
    /// Optional log file; receives every record regardless of `log_level`.
    pub log_file: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            row_count: DEFAULT_ROW_COUNT,
            seed: None,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl BenchConfig {
    /// Small seeded configuration against `db_path`, used by tests and benches.
    pub fn small(db_path: impl Into<PathBuf>, row_count: usize) -> Self {
        Self {
            db_path: db_path.into(),
            row_count,
            seed: Some(0xF10A_7BE7_C0FF_EE42),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_benchmark_constants() {
        let config = BenchConfig::default();
        assert_eq!(config.db_path, PathBuf::from("test.db"));
        assert_eq!(config.row_count, 10_000_000);
        assert!(config.seed.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn small_is_seeded() {
        let config = BenchConfig::small("x.db", 3);
        assert_eq!(config.row_count, 3);
        assert!(config.seed.is_some());
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
