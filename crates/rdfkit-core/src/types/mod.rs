//! # Core Type Definitions
//!
//! This module contains the RDF term model for the rdfkit CORE:
//! - Term kinds (`Iri`, `BlankNode`, `Literal`)
//! - Closed sum types over them (`Term`, `Subject`)
//! - The shared canonical-text capability (`RdfTerm`)
//! - Error types (`RdfError`)
//!
//! ## Identity Guarantees
//!
//! - `Iri` equality and hash are those of its string
//! - `BlankNode` equality and hash are those of its unique reference only
//! - `Literal` equality and hash cover lexical form, datatype and language tag, in that order
//!
//! Values are only minted by [`crate::Factory`], which owns all validation.

use crate::lexical::escape_lexical;
use crate::primitives::{BLANK_NODE_PREFIX, RDF_LANG_STRING, XSD_STRING};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// RDFTERM CAPABILITY
// =============================================================================

/// Capability shared by every RDF term: a canonical N-Triples encoding.
///
/// This is the one bit-exact contract serializers and test suites rely on.
pub trait RdfTerm {
    /// The term encoded as it would appear in an N-Triples document.
    fn ntriples_string(&self) -> String;
}

// =============================================================================
// IRI
// =============================================================================

/// An IRI reference, absolute or (when the factory allows it) relative.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Wrap already-validated IRI text.
    pub(crate) fn new_unchecked(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Get the IRI text without angle brackets.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the IRI, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl RdfTerm for Iri {
    fn ntriples_string(&self) -> String {
        format!("<{}>", self.0)
    }
}

// =============================================================================
// BLANK NODE
// =============================================================================

/// A blank node, identified solely by its unique reference.
///
/// The canonical label is derived from the reference, so two blank nodes
/// print the same label exactly when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BlankNode {
    unique_reference: Uuid,
}

impl BlankNode {
    pub(crate) const fn from_reference(unique_reference: Uuid) -> Self {
        Self { unique_reference }
    }

    /// The opaque identity key of this node.
    #[must_use]
    pub const fn unique_reference(&self) -> Uuid {
        self.unique_reference
    }

    /// The label without the `_:` prefix (`b` followed by 32 hex digits).
    #[must_use]
    pub fn label(&self) -> String {
        format!("b{}", self.unique_reference.simple())
    }
}

impl RdfTerm for BlankNode {
    fn ntriples_string(&self) -> String {
        format!("{}{}", BLANK_NODE_PREFIX, self.label())
    }
}

// =============================================================================
// LITERAL
// =============================================================================

/// A literal: lexical form, datatype and optional language tag.
///
/// The datatype is always present: `xsd:string` for simple literals and
/// `rdf:langString` whenever a language tag is set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Literal {
    lexical_form: String,
    datatype: Iri,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Literal {
    /// Simple literal typed `xsd:string`.
    pub(crate) fn simple(lexical_form: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Iri::new_unchecked(XSD_STRING),
            language: None,
        }
    }

    /// Language-tagged literal. The tag must already be validated.
    pub(crate) fn language_tagged(
        lexical_form: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Iri::new_unchecked(RDF_LANG_STRING),
            language: Some(language.into()),
        }
    }

    /// Literal with an explicit datatype and no language tag.
    pub(crate) fn typed(lexical_form: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype,
            language: None,
        }
    }

    /// The unescaped lexical form.
    #[must_use]
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// The datatype IRI.
    #[must_use]
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// The language tag, present only for `rdf:langString` literals.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl RdfTerm for Literal {
    fn ntriples_string(&self) -> String {
        let quoted = format!("\"{}\"", escape_lexical(&self.lexical_form));
        match &self.language {
            Some(tag) => format!("{}@{}", quoted, tag),
            None if self.datatype.as_str() == XSD_STRING => quoted,
            None => format!("{}^^{}", quoted, self.datatype.ntriples_string()),
        }
    }
}

// =============================================================================
// TERM
// =============================================================================

/// Any RDF term. The set of kinds is fixed by the RDF model.
///
/// Hashing passes straight through to the wrapped term, so a `Term` hashes
/// exactly like the `Iri`, `BlankNode` or `Literal` it holds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    #[must_use]
    pub const fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    #[must_use]
    pub const fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    #[must_use]
    pub const fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Self::BlankNode(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Short name of the term kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Iri(_) => "IRI",
            Self::BlankNode(_) => "blank node",
            Self::Literal(_) => "literal",
        }
    }
}

impl RdfTerm for Term {
    fn ntriples_string(&self) -> String {
        match self {
            Self::Iri(iri) => iri.ntriples_string(),
            Self::BlankNode(node) => node.ntriples_string(),
            Self::Literal(literal) => literal.ntriples_string(),
        }
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Iri(iri) => iri.hash(state),
            Self::BlankNode(node) => node.hash(state),
            Self::Literal(literal) => literal.hash(state),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Subject> for Term {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Iri(iri) => Self::Iri(iri),
            Subject::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

// =============================================================================
// SUBJECT
// =============================================================================

/// A term allowed in subject position: a blank node or an IRI.
///
/// Hashes like the wrapped term, as `Term` does.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Subject {
    Iri(Iri),
    BlankNode(BlankNode),
}

impl RdfTerm for Subject {
    fn ntriples_string(&self) -> String {
        match self {
            Self::Iri(iri) => iri.ntriples_string(),
            Self::BlankNode(node) => node.ntriples_string(),
        }
    }
}

impl Hash for Subject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Iri(iri) => iri.hash(state),
            Self::BlankNode(node) => node.hash(state),
        }
    }
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl TryFrom<Term> for Subject {
    type Error = RdfError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Iri(iri) => Ok(Self::Iri(iri)),
            Term::BlankNode(node) => Ok(Self::BlankNode(node)),
            Term::Literal(literal) => Err(RdfError::Type(format!(
                "subject must be an IRI or blank node, got literal {}",
                literal.ntriples_string()
            ))),
        }
    }
}

impl TryFrom<Term> for Iri {
    type Error = RdfError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Iri(iri) => Ok(iri),
            other => Err(RdfError::Type(format!(
                "expected an IRI, got {} {}",
                other.kind(),
                other.ntriples_string()
            ))),
        }
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

macro_rules! display_as_ntriples {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.ntriples_string())
                }
            }
        )*
    };
}

display_as_ntriples!(Iri, BlankNode, Literal, Term, Subject);

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while constructing terms, triples or graph contents.
///
/// - All validation happens at construction time
/// - There is no partial construction: a value is fully valid or absent
/// - Errors are deterministic input failures; retrying cannot succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RdfError {
    /// A malformed argument: blank node name, language tag or datatype.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed IRI text, or a relative IRI where only absolute ones are accepted.
    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    /// A term of the wrong kind in a typed slot (e.g. a non-IRI predicate).
    #[error("Type error: {0}")]
    Type(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn iri_canonical_form_and_hash() {
        let iri = Iri::new_unchecked("http://example.com/");
        assert_eq!(iri.as_str(), "http://example.com/");
        assert_eq!(iri.ntriples_string(), "<http://example.com/>");
        assert_eq!(hash_of(&iri), hash_of("http://example.com/"));
    }

    #[test]
    fn blank_node_label_is_derived_from_reference() {
        let node = BlankNode::from_reference(Uuid::nil());
        assert_eq!(
            node.ntriples_string(),
            "_:b00000000000000000000000000000000"
        );
        assert_eq!(hash_of(&node), hash_of(&Uuid::nil()));
    }

    #[test]
    fn literal_forms() {
        let simple = Literal::simple("Example");
        assert_eq!(simple.ntriples_string(), "\"Example\"");
        assert_eq!(simple.datatype().as_str(), XSD_STRING);
        assert_eq!(simple.language(), None);

        let tagged = Literal::language_tagged("Example", "en");
        assert_eq!(tagged.ntriples_string(), "\"Example\"@en");
        assert_eq!(tagged.datatype().as_str(), RDF_LANG_STRING);

        let typed = Literal::typed(
            "1",
            Iri::new_unchecked("http://www.w3.org/2001/XMLSchema#integer"),
        );
        assert_eq!(
            typed.ntriples_string(),
            "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn literal_lexical_form_is_escaped_only_in_canonical_form() {
        let literal = Literal::simple("a \"quoted\"\nline");
        assert_eq!(literal.lexical_form(), "a \"quoted\"\nline");
        assert_eq!(literal.ntriples_string(), "\"a \\\"quoted\\\"\\nline\"");
    }

    #[test]
    fn literal_hash_covers_all_fields() {
        let literal = Literal::simple("Hello");
        let expected = hash_of(&(
            literal.lexical_form().to_string(),
            literal.datatype().clone(),
            literal.language().map(str::to_string),
        ));
        assert_eq!(hash_of(&literal), expected);
    }

    #[test]
    fn explicit_xsd_string_equals_simple_literal() {
        let explicit = Literal::typed("Example", Iri::new_unchecked(XSD_STRING));
        assert_eq!(explicit, Literal::simple("Example"));
    }

    #[test]
    fn term_conversions() {
        let iri = Iri::new_unchecked("http://example.com/");
        let term = Term::from(iri.clone());
        assert!(term.is_iri());
        assert_eq!(term.as_iri(), Some(&iri));
        assert_eq!(Iri::try_from(term.clone()), Ok(iri.clone()));
        assert_eq!(Subject::try_from(term), Ok(Subject::Iri(iri)));

        let literal = Term::from(Literal::simple("x"));
        assert!(literal.is_literal());
        assert!(matches!(
            Subject::try_from(literal.clone()),
            Err(RdfError::Type(_))
        ));
        assert!(matches!(Iri::try_from(literal), Err(RdfError::Type(_))));

        let node = Term::from(BlankNode::from_reference(Uuid::nil()));
        assert!(node.is_blank_node());
        assert!(matches!(Iri::try_from(node), Err(RdfError::Type(_))));
    }

    #[test]
    fn term_and_subject_hash_like_the_wrapped_term() {
        let iri = Iri::new_unchecked("http://example.com/");
        assert_eq!(hash_of(&Term::from(iri.clone())), hash_of(&iri));
        assert_eq!(hash_of(&Subject::from(iri.clone())), hash_of(&iri));

        let node = BlankNode::from_reference(Uuid::nil());
        assert_eq!(hash_of(&Term::from(node)), hash_of(&node));
        assert_eq!(hash_of(&Subject::from(node)), hash_of(&node));

        let literal = Literal::language_tagged("chat", "fr");
        assert_eq!(hash_of(&Term::from(literal.clone())), hash_of(&literal));
    }

    #[test]
    fn display_matches_canonical_form() {
        let literal = Literal::language_tagged("chat", "fr");
        assert_eq!(literal.to_string(), literal.ntriples_string());
        let subject = Subject::from(Iri::new_unchecked("urn:x"));
        assert_eq!(subject.to_string(), "<urn:x>");
    }
}
