//! `seedrun-cli` library crate.
//!
//! Holds the runner configuration, error type and the orchestration
//! procedure so they can be exercised from integration tests. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod error;
pub mod runner;

pub use config::RunnerConfig;
pub use error::RunError;
pub use runner::run;
