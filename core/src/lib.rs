//! Shared plumbing for the benchmark binaries.

pub mod logging;

pub use logging::initialize_logger;
