//! # Graph Engine
//!
//! The in-memory triple container for rdfkit CORE.
//!
//! This module implements the `GraphStore` trait.
//! Triples are kept in a `BTreeSet` for set semantics and deterministic
//! iteration order.

use crate::types::{Iri, RdfError, Subject, Term};
use crate::Triple;
use std::collections::BTreeSet;

// =============================================================================
// GRAPHSTORE TRAIT
// =============================================================================

/// The GraphStore trait defines the triple container operations.
///
/// A store is a set: adding a triple that is already present changes nothing.
/// Pattern arguments set to `None` match any term in that position.
///
/// All operations return `Result<T, RdfError>` so backends that validate
/// or reject triples can share the interface with the in-memory `Graph`.
pub trait GraphStore {
    /// Insert a triple. Returns `true` if it was not already present.
    fn add(&mut self, triple: Triple) -> Result<bool, RdfError>;

    /// Remove a triple. Returns `true` if it was present.
    fn remove(&mut self, triple: &Triple) -> Result<bool, RdfError>;

    /// Check whether the exact triple is present.
    fn contains(&self, triple: &Triple) -> Result<bool, RdfError>;

    /// Number of distinct triples.
    fn size(&self) -> Result<usize, RdfError>;

    /// Remove every triple.
    fn clear(&mut self) -> Result<(), RdfError>;

    /// All triples matching the pattern, in deterministic order.
    fn triples_matching(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>, RdfError>;

    /// Check whether any triple matches the pattern.
    fn contains_matching(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Result<bool, RdfError> {
        Ok(!self.triples_matching(subject, predicate, object)?.is_empty())
    }

    /// Remove every triple matching the pattern. Returns how many were removed.
    fn remove_matching(
        &mut self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Result<usize, RdfError>;
}

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// The in-memory Graph.
///
/// The graph exclusively owns its triple set. Triples are immutable values;
/// inserting one never affects the terms it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a triple from loose terms and insert it.
    ///
    /// Applies the same slot checks as [`crate::Factory::create_triple`].
    pub fn add_statement(
        &mut self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Result<bool, RdfError> {
        let subject = Subject::try_from(subject.into())?;
        let predicate = Iri::try_from(predicate.into())?;
        self.add(Triple::new(subject, predicate, object))
    }

    /// Iterate over all triples in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Number of distinct triples (non-Result version).
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl GraphStore for Graph {
    fn add(&mut self, triple: Triple) -> Result<bool, RdfError> {
        Ok(self.triples.insert(triple))
    }

    fn remove(&mut self, triple: &Triple) -> Result<bool, RdfError> {
        Ok(self.triples.remove(triple))
    }

    fn contains(&self, triple: &Triple) -> Result<bool, RdfError> {
        Ok(self.triples.contains(triple))
    }

    fn size(&self) -> Result<usize, RdfError> {
        Ok(self.triples.len())
    }

    fn clear(&mut self) -> Result<(), RdfError> {
        self.triples.clear();
        Ok(())
    }

    fn triples_matching(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>, RdfError> {
        Ok(self
            .triples
            .iter()
            .filter(|t| t.matches(subject, predicate, object))
            .cloned()
            .collect())
    }

    fn contains_matching(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Result<bool, RdfError> {
        Ok(self.triples.iter().any(|t| t.matches(subject, predicate, object)))
    }

    fn remove_matching(
        &mut self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Result<usize, RdfError> {
        let before = self.triples.len();
        self.triples.retain(|t| !t.matches(subject, predicate, object));
        Ok(before.saturating_sub(self.triples.len()))
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Factory;

    fn sample(factory: &Factory) -> (Subject, Iri, Term) {
        (
            Subject::from(factory.create_blank_node()),
            factory.create_iri("http://example.com/").expect("iri"),
            Term::from(factory.create_blank_node()),
        )
    }

    #[test]
    fn new_graph_is_empty() {
        let graph = Graph::new();
        assert_eq!(graph.size().expect("size"), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let factory = Factory::new();
        let (s, p, o) = sample(&factory);
        let mut graph = Graph::new();

        assert!(graph.add_statement(s.clone(), p.clone(), o.clone()).expect("add"));
        assert_eq!(graph.size().expect("size"), 1);

        assert!(!graph.add_statement(s, p, o).expect("add"));
        assert_eq!(graph.size().expect("size"), 1);
    }

    #[test]
    fn add_statement_rejects_blank_node_predicate() {
        let factory = Factory::new();
        let mut graph = Graph::new();
        let result = graph.add_statement(
            factory.create_blank_node(),
            factory.create_blank_node(),
            factory.create_blank_node(),
        );
        assert!(matches!(result, Err(RdfError::Type(_))));
        assert!(graph.is_empty());
    }

    #[test]
    fn equal_triples_from_separate_constructions_collapse() {
        let factory = Factory::new();
        let s = factory.create_blank_node_named("b1").expect("bnode");
        let p = factory.create_iri("http://example.com/pred").expect("iri");
        let mut graph = Graph::new();

        graph
            .add(Triple::new(s, p.clone(), factory.create_literal("x")))
            .expect("add");
        let again = factory.create_blank_node_named("b1").expect("bnode");
        graph
            .add(Triple::new(again, p, factory.create_literal("x")))
            .expect("add");

        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn remove_and_contains() {
        let factory = Factory::new();
        let (s, p, o) = sample(&factory);
        let triple = Triple::new(s, p, o);
        let mut graph = Graph::new();

        graph.add(triple.clone()).expect("add");
        assert!(graph.contains(&triple).expect("contains"));
        assert!(graph.remove(&triple).expect("remove"));
        assert!(!graph.contains(&triple).expect("contains"));
        assert!(!graph.remove(&triple).expect("remove"));
    }

    #[test]
    fn pattern_queries() {
        let factory = Factory::new();
        let alice = Subject::from(factory.create_iri("http://example.com/alice").expect("iri"));
        let bob = Subject::from(factory.create_iri("http://example.com/bob").expect("iri"));
        let name = factory.create_iri("http://xmlns.com/foaf/0.1/name").expect("iri");
        let knows = factory.create_iri("http://xmlns.com/foaf/0.1/knows").expect("iri");

        let mut graph = Graph::new();
        graph
            .add(Triple::new(alice.clone(), name.clone(), factory.create_literal("Alice")))
            .expect("add");
        graph
            .add(Triple::new(bob.clone(), name.clone(), factory.create_literal("Bob")))
            .expect("add");
        graph
            .add(Triple::new(alice.clone(), knows.clone(), Term::from(bob.clone())))
            .expect("add");

        let names = graph.triples_matching(None, Some(&name), None).expect("match");
        assert_eq!(names.len(), 2);

        let about_alice = graph
            .triples_matching(Some(&alice), None, None)
            .expect("match");
        assert_eq!(about_alice.len(), 2);

        assert!(
            graph
                .contains_matching(None, Some(&knows), Some(&Term::from(bob.clone())))
                .expect("contains")
        );
        assert!(
            !graph
                .contains_matching(Some(&bob), Some(&knows), None)
                .expect("contains")
        );

        let removed = graph.remove_matching(None, Some(&name), None).expect("remove");
        assert_eq!(removed, 2);
        assert_eq!(graph.size().expect("size"), 1);
    }

    #[test]
    fn clear_empties_graph() {
        let factory = Factory::new();
        let (s, p, o) = sample(&factory);
        let mut graph: Graph = std::iter::once(Triple::new(s, p, o)).collect();
        assert_eq!(graph.len(), 1);
        graph.clear().expect("clear");
        assert!(graph.is_empty());
    }

    #[test]
    fn iteration_is_deterministic() {
        let factory = Factory::new();
        let p = factory.create_iri("urn:p").expect("iri");
        let triples: Vec<Triple> = ["urn:c", "urn:a", "urn:b"]
            .iter()
            .map(|s| {
                Triple::new(
                    factory.create_iri(s).expect("iri"),
                    p.clone(),
                    factory.create_literal("o"),
                )
            })
            .collect();

        let mut forward = Graph::new();
        forward.extend(triples.iter().cloned());
        let mut backward = Graph::new();
        backward.extend(triples.into_iter().rev());

        let a: Vec<_> = forward.iter().map(|t| t.to_string()).collect();
        let b: Vec<_> = (&backward).into_iter().map(|t| t.to_string()).collect();
        assert_eq!(a, b);
        assert!(a[0].starts_with("<urn:a>"));
    }
}
