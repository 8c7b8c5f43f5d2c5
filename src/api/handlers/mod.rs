//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Liveness and health handlers.
pub mod health;
/// Research memo pipeline handlers.
pub mod research;
