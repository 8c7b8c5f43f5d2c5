//! Configuration utilities.

/// Environment-based runtime configuration.
pub mod config;
