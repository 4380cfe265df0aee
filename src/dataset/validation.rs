//! Structural dataset validation.
//!
//! These checks run before any triple is interpreted and guard the
//! loader against oversized or malformed input. Semantic checks
//! (dangling references, typing) happen during compilation in
//! `storage::loader`.

use std::sync::OnceLock;

use regex::Regex;

use crate::dataset::triple::{Dataset, Term};
use crate::error::LoadError;

/// Upper bound on the number of triples in one dataset.
pub const MAX_TRIPLES: usize = 4096;

/// Upper bound on a literal's length in bytes.
pub const MAX_LITERAL_LEN: usize = 16 * 1024;

const IDENT_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

static IDENT_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn ident_regex() -> Result<&'static Regex, LoadError> {
    IDENT_REGEX
        .get_or_init(|| Regex::new(IDENT_PATTERN))
        .as_ref()
        .map_err(|e| LoadError::Parse {
            message: format!("identifier pattern: {e}"),
        })
}

/// Validate a subject, predicate, or reference identifier.
pub fn validate_identifier(ident: &str) -> Result<(), LoadError> {
    if ident_regex()?.is_match(ident) {
        Ok(())
    } else {
        Err(LoadError::InvalidIdentifier {
            ident: ident.to_string(),
        })
    }
}

/// Validate the shape of a dataset without interpreting it.
pub fn validate(dataset: &Dataset) -> Result<(), LoadError> {
    if dataset.triples.len() > MAX_TRIPLES {
        return Err(LoadError::TooManyTriples {
            actual: dataset.triples.len(),
            max: MAX_TRIPLES,
        });
    }

    for triple in &dataset.triples {
        validate_identifier(&triple.subject)?;
        validate_identifier(&triple.predicate)?;
        match &triple.object {
            Term::Ref(ident) => validate_identifier(ident)?,
            Term::Literal(text) if text.len() > MAX_LITERAL_LEN => {
                return Err(LoadError::LiteralTooLong {
                    subject: triple.subject.clone(),
                    max_length: MAX_LITERAL_LEN,
                });
            }
            Term::Literal(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::triple::Triple;

    #[test]
    fn accepts_identifiers() {
        for ident in ["Add", "rule_addition", "_x", "err2"] {
            assert!(validate_identifier(ident).is_ok(), "{ident}");
        }
    }

    #[test]
    fn rejects_identifiers() {
        for ident in ["", "2fast", "has space", "a-b", "ex:Add"] {
            assert!(
                matches!(validate_identifier(ident), Err(LoadError::InvalidIdentifier { .. })),
                "{ident}"
            );
        }
    }

    #[test]
    fn rejects_long_literal() {
        let ds = Dataset::new("t").with(Triple::literal(
            "r",
            "ruleText",
            "x".repeat(MAX_LITERAL_LEN + 1),
        ));
        assert!(matches!(validate(&ds), Err(LoadError::LiteralTooLong { .. })));
    }

    #[test]
    fn rejects_too_many_triples() {
        let mut ds = Dataset::new("t");
        ds.triples = vec![Triple::reference("a", "type", "ErrorType"); MAX_TRIPLES + 1];
        assert!(matches!(
            validate(&ds),
            Err(LoadError::TooManyTriples { actual, .. }) if actual == MAX_TRIPLES + 1
        ));
    }

    #[test]
    fn literal_text_is_not_an_identifier() {
        let ds = Dataset::new("t").with(Triple::literal("r", "ruleName", "Addition rule"));
        assert!(validate(&ds).is_ok());
    }
}
