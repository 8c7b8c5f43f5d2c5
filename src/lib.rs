//! # Memograph - Company Research Memo Server
//!
//! An automated company research pipeline built in Rust: parallel evidence
//! collection, curation, LLM section drafting and a QA pass, rendered into a
//! recruiter-ready markdown memo and served over HTTP.
//!
//! ## Overview
//!
//! Memograph can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `memograph-server` binary and
//!    `POST /research` with a company name
//! 2. **As a library** - Drive the pipeline directly from your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! memograph-server = "0.3"
//! ```
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use memograph::graph::build_research_graph;
//! use memograph::llm::GeneratorProvider;
//! use memograph::state::ResearchState;
//! use memograph::tools::aum::AumProvider;
//! use memograph::tools::search::SearchProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let search = SearchProvider::Tavily {
//!         api_key: std::env::var("TAVILY_API_KEY")?,
//!         api_base: "https://api.tavily.com".to_string(),
//!     };
//!
//!     let graph = build_research_graph(
//!         search.create(),
//!         AumProvider::Disabled.create(),
//!         GeneratorProvider::Disabled.create(),
//!     )?;
//!
//!     let seed = ResearchState::seeded("Acme Capital", None, None, "standard");
//!     let run = graph.run(seed).await?;
//!     println!("{}", run.state.final_report_markdown.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline Shape
//!
//! ```text
//! planner
//!   ├── fundamentals ──┐
//!   ├── leadership ────┤
//!   ├── aum ───────────┼── curation ── section_writer ── qa_final
//!   ├── outlook ───────┤
//!   └── culture ───────┘
//! ```
//!
//! The five collectors run concurrently on cloned state; their appended
//! evidence is merged back field by field when the wave completes.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command-line parsing and terminal output
//! - [`graph`] - Stage trait, levelled executor and the research graph
//! - [`llm`] - Text generation clients
//! - [`stages`] - The nine pipeline stages
//! - [`state`] - Research state and branch merge functions
//! - [`tools`] - Evidence providers (search, manager AUM)
//! - [`types`] - Common types and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface and colored output.
pub mod cli;
/// Stage graph engine and the research graph wiring.
pub mod graph;
/// Text generation clients and abstractions.
pub mod llm;
/// The pipeline stages.
pub mod stages;
/// Run state, evidence model and merge functions.
pub mod state;
/// Evidence providers (web search, manager AUM).
pub mod tools;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use graph::{GraphRun, Stage, StageGraph, StageGraphBuilder, build_research_graph};
pub use llm::{GenerationOutcome, GeneratorProvider, TextGenerator};
pub use state::ResearchState;
pub use tools::aum::{AumProvider, ManagerAumSource};
pub use tools::search::{EvidenceSearch, SearchProvider};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration loaded at startup
    pub config: Arc<Config>,
    /// Evidence search backend
    pub search: Arc<dyn EvidenceSearch>,
    /// Manager AUM lookup backend
    pub aum_source: Arc<dyn ManagerAumSource>,
    /// Section text generator
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Build the state from configuration, creating each provider client.
    pub fn from_config(config: Config) -> Self {
        let search = config.search_provider().create();
        let aum_source = config.aum_provider().create();
        let generator = config.generator_provider().create();

        Self {
            config: Arc::new(config),
            search,
            aum_source,
            generator,
        }
    }
}
