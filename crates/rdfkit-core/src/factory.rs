//! # Factory
//!
//! The sole authority for term construction rules.
//!
//! - Validates IRIs, language tags and blank node names
//! - Scopes named blank nodes to the factory instance
//! - Builds triples with slot checks and hands out fresh graphs
//!
//! ## Blank Node Identity
//!
//! Every blank node gets a random v4 UUID as its unique reference. The
//! per-factory name registry is the authority for named nodes: the first
//! request for a name mints a fresh node and records it, later requests
//! return the recorded node. Registries are never shared, so equal names in
//! different factories produce different nodes.

use crate::config::FactoryConfig;
use crate::graph::Graph;
use crate::lexical::{validate_iri, validate_language_tag};
use crate::primitives::RDF_LANG_STRING;
use crate::triple::Triple;
use crate::types::{BlankNode, Iri, Literal, RdfError, RdfTerm, Subject, Term};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Constructs terms, triples and graphs.
///
/// `Factory` is `Send + Sync`: the blank node registry sits behind a mutex,
/// so a shared factory still honours the same-name-same-node rule.
#[derive(Debug)]
pub struct Factory {
    config: FactoryConfig,
    /// Blank node registry: name -> minted node. Never shared across factories.
    blank_nodes: Mutex<BTreeMap<String, BlankNode>>,
}

impl Factory {
    /// Create a factory with the default policies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    /// Create a factory applying the given policies.
    #[must_use]
    pub fn with_config(config: FactoryConfig) -> Self {
        Self {
            config,
            blank_nodes: Mutex::new(BTreeMap::new()),
        }
    }

    /// The policies this factory applies.
    #[must_use]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    // =========================================================================
    // TERMS
    // =========================================================================

    /// Create an IRI.
    ///
    /// Returns `RdfError::InvalidTerm` for text the N-Triples `IRIREF`
    /// production cannot carry, and for relative IRIs when the factory is
    /// configured to reject them.
    pub fn create_iri(&self, iri: &str) -> Result<Iri, RdfError> {
        validate_iri(iri, self.config.allow_relative_iris)?;
        Ok(Iri::new_unchecked(iri))
    }

    /// Create a fresh blank node, distinct from every other blank node.
    #[must_use]
    pub fn create_blank_node(&self) -> BlankNode {
        BlankNode::from_reference(Uuid::new_v4())
    }

    /// Create the blank node this factory associates with `name`.
    ///
    /// Repeated calls with the same name return equal nodes. The name only
    /// seeds the identity; it never appears in the canonical label.
    pub fn create_blank_node_named(&self, name: &str) -> Result<BlankNode, RdfError> {
        if name.is_empty() {
            return Err(RdfError::InvalidArgument(
                "blank node name must not be empty".to_string(),
            ));
        }
        if self.config.reject_colon_in_blank_node_names && name.contains(':') {
            return Err(RdfError::InvalidArgument(format!(
                "blank node name {:?} contains ':'",
                name
            )));
        }

        let mut registry = self
            .blank_nodes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let node = *registry
            .entry(name.to_string())
            .or_insert_with(|| self.create_blank_node());
        Ok(node)
    }

    /// Create a simple literal typed `xsd:string`.
    #[must_use]
    pub fn create_literal(&self, lexical_form: &str) -> Literal {
        Literal::simple(lexical_form)
    }

    /// Create a language-tagged literal typed `rdf:langString`.
    ///
    /// Returns `RdfError::InvalidArgument` if the tag is not of the form
    /// `primary(-subtag)*`.
    pub fn create_literal_lang(
        &self,
        lexical_form: &str,
        language: &str,
    ) -> Result<Literal, RdfError> {
        validate_language_tag(language)?;
        Ok(Literal::language_tagged(lexical_form, language))
    }

    /// Create a literal with an explicit datatype.
    ///
    /// `rdf:langString` is reserved for language-tagged literals and is
    /// rejected here with `RdfError::InvalidArgument`.
    pub fn create_literal_typed(
        &self,
        lexical_form: &str,
        datatype: Iri,
    ) -> Result<Literal, RdfError> {
        if datatype.as_str() == RDF_LANG_STRING {
            return Err(RdfError::InvalidArgument(
                "rdf:langString requires a language tag".to_string(),
            ));
        }
        Ok(Literal::typed(lexical_form, datatype))
    }

    // =========================================================================
    // TRIPLES & GRAPHS
    // =========================================================================

    /// Create a triple from arbitrary terms, checking each slot.
    ///
    /// Returns `RdfError::Type` if the subject is a literal or the predicate
    /// is anything but an IRI.
    pub fn create_triple(
        &self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Result<Triple, RdfError> {
        let subject = Subject::try_from(subject.into())?;
        let predicate = match predicate.into() {
            Term::Iri(iri) => iri,
            other => {
                return Err(RdfError::Type(format!(
                    "predicate must be an IRI, got {} {}",
                    other.kind(),
                    other.ntriples_string()
                )));
            }
        };
        Ok(Triple::new(subject, predicate, object))
    }

    /// Create a fresh, empty graph independent of every other graph.
    #[must_use]
    pub fn create_graph(&self) -> Graph {
        Graph::new()
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
