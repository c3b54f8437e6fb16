//! # Vocabulary Primitives
//!
//! Hardcoded vocabulary constants for the rdfkit CORE.
//!
//! These IRIs are fixed by the RDF 1.1 Concepts recommendation and are
//! compiled into the binary.

/// The XML Schema datatype namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// The RDF syntax namespace.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Datatype of simple literals (no explicit datatype, no language tag).
///
/// Literals with this datatype serialize without a `^^` suffix.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Datatype forced onto every language-tagged literal.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// Prefix of every canonical blank node label.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Maximum length of a single language subtag (BCP 47 caps subtags at 8).
pub const MAX_SUBTAG_LENGTH: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatypes_live_in_their_namespaces() {
        assert!(XSD_STRING.starts_with(XSD_NAMESPACE));
        assert!(RDF_LANG_STRING.starts_with(RDF_NAMESPACE));
    }

    #[test]
    fn blank_node_prefix_is_ntriples() {
        assert_eq!(BLANK_NODE_PREFIX, "_:");
    }
}
