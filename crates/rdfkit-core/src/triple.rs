//! # Triple
//!
//! An RDF statement with typed slots. Equality, hash and ordering are
//! componentwise over (subject, predicate, object).

use crate::types::{Iri, RdfTerm, Subject, Term};
use serde::Serialize;
use std::fmt;

/// A (subject, predicate, object) statement.
///
/// Blank nodes keep the identity they were minted with; constructing a
/// triple never re-scopes them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Triple {
    subject: Subject,
    predicate: Iri,
    object: Term,
}

impl Triple {
    /// Build a triple from already-typed components. Infallible.
    #[must_use]
    pub fn new(subject: impl Into<Subject>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    #[must_use]
    pub fn predicate(&self) -> &Iri {
        &self.predicate
    }

    #[must_use]
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Check the triple against a pattern; `None` matches anything.
    #[must_use]
    pub fn matches(
        &self,
        subject: Option<&Subject>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> bool {
        subject.is_none_or(|s| *s == self.subject)
            && predicate.is_none_or(|p| *p == self.predicate)
            && object.is_none_or(|o| *o == self.object)
    }

    /// Split the triple into its components.
    #[must_use]
    pub fn into_parts(self) -> (Subject, Iri, Term) {
        (self.subject, self.predicate, self.object)
    }
}

impl fmt::Display for Triple {
    /// One N-Triples statement line, without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} .",
            self.subject.ntriples_string(),
            self.predicate.ntriples_string(),
            self.object.ntriples_string()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
