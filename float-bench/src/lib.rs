//! SQLite Bulk Write Benchmark
//!
//! Measures bulk-insert and bulk-update throughput against an on-disk SQLite
//! file. One run is three steps, each ending in a commit:
//!
//! 1. **Schema**: drop and recreate the `floats` table (three REAL columns)
//! 2. **Populate**: insert N uniformly-random triples in one transaction
//! 3. **Transform**: read every row back and rewrite
//!    `col1 = col2 * 3.0 * sin(5.0 * col3)` in one transaction
//!
//! Run the benchmark: `cargo run --release`
//! Run criterion benches: `cargo bench`

pub mod config;
pub mod pipeline;
pub mod populate;
pub mod report;
pub mod schema;
pub mod transform;
pub mod verify;
