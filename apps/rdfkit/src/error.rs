//! # App Errors
//!
//! Everything a CLI invocation can fail with: core construction errors plus
//! the configuration and output failures only the app layer can hit.

use rdfkit_core::RdfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A term, triple or graph operation was rejected by the core.
    #[error(transparent)]
    Rdf(#[from] RdfError),

    /// The configuration file or an environment override is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line argument could not be turned into a term.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
