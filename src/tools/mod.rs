//! External Evidence Boundaries
//!
//! The outbound capabilities the topic collectors draw on: web evidence
//! search and the manager-AUM lookup. Both boundaries absorb provider
//! failures into empty result sets, so a dead upstream degrades memo
//! coverage instead of failing the run.
//!
//! # Module Structure
//!
//! - [`search`](crate::tools::search) - Topic-scoped web evidence search
//!   (Tavily, DuckDuckGo)
//! - [`aum`](crate::tools::aum) - Manager assets-under-management lookup

/// Manager AUM lookup against With Intelligence.
pub mod aum;
/// Web evidence search providers.
pub mod search;
