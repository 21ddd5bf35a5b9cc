//! Support modules for the `titanic-explorer` binary.

pub mod config;
pub mod logging;
