//! Predicate and class vocabulary understood by the loader.

use crate::entity::{Attribute, EntityKind, OperationKind};

/// Predicate declaring the class of a subject.
pub const TYPE: &str = "type";
/// Operation → rule.
pub const HAS_RULE: &str = "hasRule";
/// Operation → error type (many-valued).
pub const HAS_COMMON_ERROR: &str = "hasCommonError";

/// Class of rule individuals.
pub const RULE_CLASS: &str = "ArithmeticRule";
/// Class of error-type individuals.
pub const ERROR_CLASS: &str = "ErrorType";

/// A recognized predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// [`TYPE`]
    Type,
    /// [`HAS_RULE`]
    HasRule,
    /// [`HAS_COMMON_ERROR`]
    HasCommonError,
    /// A textual attribute.
    Attribute(Attribute),
}

impl Predicate {
    /// Parses a predicate identifier.
    #[must_use]
    pub fn parse(predicate: &str) -> Option<Self> {
        match predicate {
            TYPE => Some(Self::Type),
            HAS_RULE => Some(Self::HasRule),
            HAS_COMMON_ERROR => Some(Self::HasCommonError),
            other => Attribute::from_predicate(other).map(Self::Attribute),
        }
    }
}

/// A recognized class, i.e. a valid object of a `type` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// `Addition`, `Subtraction`, `Multiplication`, or `Division`.
    Operation(OperationKind),
    /// [`RULE_CLASS`]
    Rule,
    /// [`ERROR_CLASS`]
    ErrorType,
}

impl Class {
    /// Parses a class name.
    #[must_use]
    pub fn parse(class: &str) -> Option<Self> {
        match class {
            RULE_CLASS => Some(Self::Rule),
            ERROR_CLASS => Some(Self::ErrorType),
            other => OperationKind::from_class_name(other).map(Self::Operation),
        }
    }

    /// The kind of entity this class declares.
    #[must_use]
    pub const fn entity_kind(self) -> EntityKind {
        match self {
            Self::Operation(_) => EntityKind::Operation,
            Self::Rule => EntityKind::Rule,
            Self::ErrorType => EntityKind::ErrorType,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_predicates() {
        assert_eq!(Predicate::parse("type"), Some(Predicate::Type));
        assert_eq!(Predicate::parse("hasCommonError"), Some(Predicate::HasCommonError));
        assert_eq!(
            Predicate::parse("errorHint"),
            Some(Predicate::Attribute(Attribute::ErrorHint))
        );
        assert_eq!(Predicate::parse("subClassOf"), None);
    }

    #[test]
    fn parses_classes() {
        assert_eq!(
            Class::parse("Subtraction"),
            Some(Class::Operation(OperationKind::Subtraction))
        );
        assert_eq!(Class::parse("ErrorType").map(Class::entity_kind), Some(EntityKind::ErrorType));
        assert_eq!(Class::parse("Operation"), None);
    }
}
