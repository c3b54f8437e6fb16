//! # Lexical Rules
//!
//! Character-level validation and escaping for the N-Triples term grammar.
//!
//! - IRI text must be representable inside `<` `>` without escapes
//! - Language tags follow the BCP 47 shape `primary(-subtag)*`
//! - Literal lexical forms are escaped with the four `ECHAR` sequences

use crate::RdfError;
use crate::primitives::MAX_SUBTAG_LENGTH;

/// Characters the `IRIREF` production forbids in addition to controls and space.
const FORBIDDEN_IRI_CHARS: [char; 8] = ['<', '>', '"', '{', '}', '|', '^', '`'];

/// Validate IRI text.
///
/// Rejects code points up to U+0020, the characters of `FORBIDDEN_IRI_CHARS`
/// and backslashes. Relative references are rejected only when
/// `allow_relative` is false.
pub fn validate_iri(iri: &str, allow_relative: bool) -> Result<(), RdfError> {
    if let Some(bad) = iri
        .chars()
        .find(|c| *c <= '\u{20}' || *c == '\\' || FORBIDDEN_IRI_CHARS.contains(c))
    {
        return Err(RdfError::InvalidTerm(format!(
            "IRI {:?} contains disallowed character {:?}",
            iri, bad
        )));
    }

    if !allow_relative && !is_absolute_iri(iri) {
        return Err(RdfError::InvalidTerm(format!(
            "relative IRI {:?} is not supported",
            iri
        )));
    }

    Ok(())
}

/// Check whether IRI text starts with a scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`).
#[must_use]
pub fn is_absolute_iri(iri: &str) -> bool {
    let Some((scheme, _)) = iri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Validate a language tag.
///
/// The primary subtag is 1-8 ASCII letters; every following subtag is
/// 1-8 ASCII letters or digits, separated by single hyphens.
pub fn validate_language_tag(tag: &str) -> Result<(), RdfError> {
    let invalid = || RdfError::InvalidArgument(format!("invalid language tag {:?}", tag));

    let mut subtags = tag.split('-');
    let primary = subtags.next().ok_or_else(invalid)?;
    if !is_subtag(primary, |c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    for subtag in subtags {
        if !is_subtag(subtag, |c| c.is_ascii_alphanumeric()) {
            return Err(invalid());
        }
    }
    Ok(())
}

fn is_subtag(subtag: &str, allowed: impl Fn(char) -> bool) -> bool {
    !subtag.is_empty() && subtag.len() <= MAX_SUBTAG_LENGTH && subtag.chars().all(allowed)
}

/// Escape a lexical form for use between N-Triples double quotes.
#[must_use]
pub fn escape_lexical(lexical: &str) -> String {
    let mut escaped = String::with_capacity(lexical.len());
    for c in lexical.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_iris() {
        assert!(validate_iri("http://accént.example.com/première", false).is_ok());
        assert!(validate_iri("http://example.испытание/Кириллица", false).is_ok());
        assert!(validate_iri("http://𐐀.example.com/𐐀", false).is_ok());
    }

    #[test]
    fn rejects_angle_brackets_and_whitespace() {
        assert!(matches!(
            validate_iri("<no_brackets>", true),
            Err(RdfError::InvalidTerm(_))
        ));
        assert!(validate_iri("http://example.com/a b", true).is_err());
        assert!(validate_iri("http://example.com/\ttab", true).is_err());
        assert!(validate_iri("http://example.com/\\", true).is_err());
    }

    #[test]
    fn relative_policy() {
        assert!(validate_iri("../relative", true).is_ok());
        assert!(validate_iri("", true).is_ok());
        assert!(matches!(
            validate_iri("../relative", false),
            Err(RdfError::InvalidTerm(_))
        ));
        assert!(validate_iri("", false).is_err());
    }

    #[test]
    fn scheme_detection() {
        assert!(is_absolute_iri("http://example.com/"));
        assert!(is_absolute_iri("urn:isbn:0451450523"));
        assert!(is_absolute_iri("git+ssh://host/repo"));
        assert!(!is_absolute_iri("../relative#term"));
        assert!(!is_absolute_iri("1http://example.com/"));
        assert!(!is_absolute_iri(":nothing"));
    }

    #[test]
    fn language_tags() {
        assert!(validate_language_tag("en").is_ok());
        assert!(validate_language_tag("vls").is_ok());
        assert!(validate_language_tag("en-GB").is_ok());
        assert!(validate_language_tag("zh-Hant-TW").is_ok());
        assert!(validate_language_tag("de-1996").is_ok());

        for bad in ["", "with space", "en-", "-en", "en--GB", "1en", "toolongtag", "fr_FR"] {
            assert!(
                matches!(validate_language_tag(bad), Err(RdfError::InvalidArgument(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn escapes_echar_sequences() {
        assert_eq!(escape_lexical("plain"), "plain");
        assert_eq!(escape_lexical("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_lexical("a\\b"), "a\\\\b");
        assert_eq!(escape_lexical("line\nbreak\r"), "line\\nbreak\\r");
        assert_eq!(escape_lexical("tab\tstays"), "tab\tstays");
    }
}
