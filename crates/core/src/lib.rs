//! Pure building blocks for the `seedrun` SQL script runner.
//!
//! Nothing in this crate touches the network: it loads the env file,
//! validates connection settings, splits SQL text into statements and
//! classifies database error text.

pub mod duplicate;
pub mod env_file;
pub mod error;
pub mod settings;
pub mod sql_split;
