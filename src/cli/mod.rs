//! CLI module for Memograph
//!
//! Provides command-line parsing for the memograph-server binary. Uses clap
//! for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::Parser;

/// Memograph - Company Research Memo Server
///
/// An automated research-memo pipeline: fan-out evidence collection, curation,
/// LLM section drafting and QA, served over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "memograph-server",
    version,
    about = "Memograph - Company Research Memo Server",
    long_about = "An automated company research-memo server.\n\n\
                  POST /research runs the full pipeline for one company and returns\n\
                  the memo as markdown. Providers are configured via environment\n\
                  variables (see .env.example).",
    after_help = "EXAMPLES:\n    \
                  memograph-server                    # Bind 127.0.0.1:3000 (or HOST/PORT)\n    \
                  memograph-server --port 8080        # Override the port\n    \
                  memograph-server --no-color         # Plain log-friendly output"
)]
pub struct Cli {
    /// Host address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
