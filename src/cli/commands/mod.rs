//! Command implementations for the `wtk` binary.
//!
//! Each command receives the shared [`AppContext`](crate::cli::AppContext)
//! and returns a [`CliResult`](crate::cli::CliResult).

pub mod agents;
pub mod config;
pub mod tools;
