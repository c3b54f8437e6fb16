//! # rdfkit
//!
//! Library half of the rdfkit binary: argument parsing, configuration
//! loading and command implementations, exposed for integration tests.

pub mod cli;
pub mod config;
pub mod error;

pub use error::AppError;
