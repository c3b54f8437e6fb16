//! # rdfkit-core
//!
//! The RDF data model for rdfkit - THE LOGIC.
//!
//! This crate implements typed RDF terms (IRIs, blank nodes, literals),
//! triples built from them and in-memory graphs that store triples.
//!
//! ## Usage
//!
//! ```
//! use rdfkit_core::{Factory, GraphStore, RdfTerm};
//!
//! let factory = Factory::new();
//! let alice = factory.create_blank_node_named("alice")?;
//! let name = factory.create_iri("http://xmlns.com/foaf/0.1/name")?;
//! let value = factory.create_literal_lang("Alice", "en")?;
//!
//! let mut graph = factory.create_graph();
//! graph.add(factory.create_triple(alice, name, value)?)?;
//! assert_eq!(graph.size()?, 1);
//! assert_eq!(factory.create_literal("Example").ntriples_string(), "\"Example\"");
//! # Ok::<(), rdfkit_core::RdfError>(())
//! ```
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where term construction rules live (the `Factory`)
//! - Performs no I/O; configuration arrives as a plain struct
//! - Keeps blank node identity scoped per factory, never global
//! - Has NO async, NO logging dependency (the app layer owns tracing)

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod factory;
pub mod graph;
pub mod lexical;
pub mod primitives;
pub mod triple;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{BlankNode, Iri, Literal, RdfError, RdfTerm, Subject, Term};

// =============================================================================
// RE-EXPORTS: Model
// =============================================================================

pub use config::FactoryConfig;
pub use factory::Factory;
pub use graph::{Graph, GraphStore};
pub use triple::Triple;
