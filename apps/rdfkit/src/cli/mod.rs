//! # rdfkit CLI Module
//!
//! This module implements the CLI interface for rdfkit.
//!
//! ## Available Commands
//!
//! - `iri` - Validate an IRI and print its canonical form
//! - `bnode` - Mint anonymous or named blank nodes
//! - `literal` - Build a simple, language-tagged or typed literal
//! - `triple` - Build a single triple
//! - `graph` - Add triples to one graph and report its distinct size
//! - `config` - Show the effective factory configuration
//!
//! Every invocation uses exactly one `Factory`, so repeated blank node names
//! within one command line denote the same node.

mod commands;

use crate::config::load_factory_config;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use rdfkit_core::Factory;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// rdfkit - RDF terms, triples and graphs
///
/// Builds terms through a validating factory and prints their N-Triples form.
#[derive(Parser, Debug)]
#[command(name = "rdfkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Factory configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an IRI and print its canonical form
    Iri {
        /// IRI text, without angle brackets
        iri: String,
    },

    /// Mint blank nodes
    Bnode {
        /// Blank node names; repeat to mint several. Omit for one anonymous node.
        #[arg(short, long)]
        name: Vec<String>,
    },

    /// Build a literal
    Literal {
        /// Lexical form
        lexical: String,

        /// Language tag (forces rdf:langString)
        #[arg(short, long, conflicts_with = "datatype")]
        lang: Option<String>,

        /// Datatype IRI
        #[arg(short, long)]
        datatype: Option<String>,
    },

    /// Build a triple. `_:name` denotes a named blank node, anything else an IRI.
    Triple {
        subject: String,
        predicate: String,
        object: String,

        /// Treat the object as a literal's lexical form
        #[arg(long)]
        literal: bool,

        /// Language tag for a literal object
        #[arg(long, requires = "literal", conflicts_with = "datatype")]
        lang: Option<String>,

        /// Datatype IRI for a literal object
        #[arg(long, requires = "literal")]
        datatype: Option<String>,
    },

    /// Add triples to one graph and print its contents
    Graph {
        /// A whitespace-separated `S P O` statement; repeat for several.
        /// A double-quoted object is a simple literal.
        #[arg(short, long = "triple", value_name = "S P O")]
        triples: Vec<String>,
    },

    /// Show the effective factory configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, returning the text to print.
pub fn execute(cli: Cli) -> Result<String, AppError> {
    let config = load_factory_config(cli.config.as_deref())?;
    if cli.verbose {
        tracing::info!(
            "Factory config: allow_relative_iris={}, reject_colon_in_blank_node_names={}",
            config.allow_relative_iris,
            config.reject_colon_in_blank_node_names
        );
    }
    let factory = Factory::with_config(config);
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Iri { iri } => cmd_iri(&factory, json_mode, &iri),
        Commands::Bnode { name } => cmd_bnode(&factory, json_mode, &name),
        Commands::Literal {
            lexical,
            lang,
            datatype,
        } => cmd_literal(
            &factory,
            json_mode,
            &lexical,
            lang.as_deref(),
            datatype.as_deref(),
        ),
        Commands::Triple {
            subject,
            predicate,
            object,
            literal,
            lang,
            datatype,
        } => {
            let object = if literal {
                ObjectArg::Literal {
                    lexical: object,
                    lang,
                    datatype,
                }
            } else {
                ObjectArg::Term(object)
            };
            cmd_triple(&factory, json_mode, &subject, &predicate, object)
        }
        Commands::Graph { triples } => cmd_graph(&factory, json_mode, &triples),
        Commands::Config => cmd_config(&factory, json_mode),
    }
}
