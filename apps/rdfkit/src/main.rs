//! # rdfkit - RDF Term Toolkit
//!
//! The command-line binary over `rdfkit-core`.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │           apps/rdfkit (THE BINARY)         │
//! │                                            │
//! │   ┌──────────┐   ┌──────────────────────┐  │
//! │   │   CLI    │   │  Config (TOML / env) │  │
//! │   │  (clap)  │   │                      │  │
//! │   └────┬─────┘   └──────────┬───────────┘  │
//! │        └──────────┬─────────┘              │
//! │                   ▼                        │
//! │           ┌───────────────┐                │
//! │           │  rdfkit-core  │                │
//! │           │  (THE LOGIC)  │                │
//! │           └───────────────┘                │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! rdfkit iri http://example.com/
//! rdfkit literal Example --lang en
//! rdfkit bnode -n a -n a -n b
//! rdfkit triple _:b1 http://example.com/p Example --literal --lang en
//! rdfkit graph -t '_:s http://example.com/p "x"' -t '_:s http://example.com/p "x"'
//! ```

use clap::Parser;
use rdfkit::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing: RDFKIT_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries only term output.
    let log_format = std::env::var("RDFKIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rdfkit=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    match cli::execute(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
