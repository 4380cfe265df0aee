//! Entity types and identity management.
//!
//! The knowledge base holds three kinds of entities: operations, rules,
//! and error types. They live in per-kind arenas inside the fact store
//! and are addressed by small copyable handles. Handles are only minted
//! by the store that owns the entities.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! arena_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            #[allow(clippy::cast_possible_truncation)]
            pub(crate) const fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            /// Returns the zero-based arena index.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

arena_handle!(
    /// Handle to an [`Operation`] in a fact store.
    OperationId,
    "operation"
);
arena_handle!(
    /// Handle to a [`Rule`] in a fact store.
    RuleId,
    "rule"
);
arena_handle!(
    /// Handle to an [`ErrorType`] in a fact store.
    ErrorTypeId,
    "error"
);

/// The kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An arithmetic operation.
    Operation,
    /// A teaching rule.
    Rule,
    /// A student mistake category.
    ErrorType,
}

impl EntityKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operation => "operation",
            Self::Rule => "rule",
            Self::ErrorType => "error type",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to any entity in a fact store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// An operation.
    Operation(OperationId),
    /// A rule.
    Rule(RuleId),
    /// An error type.
    ErrorType(ErrorTypeId),
}

impl EntityRef {
    /// Returns the kind of the referenced entity.
    #[must_use]
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::Operation(_) => EntityKind::Operation,
            Self::Rule(_) => EntityKind::Rule,
            Self::ErrorType(_) => EntityKind::ErrorType,
        }
    }
}

impl From<OperationId> for EntityRef {
    fn from(id: OperationId) -> Self {
        Self::Operation(id)
    }
}

impl From<RuleId> for EntityRef {
    fn from(id: RuleId) -> Self {
        Self::Rule(id)
    }
}

impl From<ErrorTypeId> for EntityRef {
    fn from(id: ErrorTypeId) -> Self {
        Self::ErrorType(id)
    }
}

/// One of the four supported arithmetic operations.
///
/// # Examples
///
/// ```
/// use arith_tutor::OperationKind;
///
/// let kind = OperationKind::from_symbol("*").unwrap();
/// assert_eq!(kind, OperationKind::Multiplication);
/// assert_eq!(kind.apply(6.0, 4.0), 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
}

impl OperationKind {
    /// All kinds, in symbol order.
    pub const ALL: [Self; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    /// The operator symbol for this kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Addition => '+',
            Self::Subtraction => '-',
            Self::Multiplication => '*',
            Self::Division => '/',
        }
    }

    /// Maps an operator symbol to its kind. Only the four single
    /// characters `+ - * /` are recognized.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Addition),
            "-" => Some(Self::Subtraction),
            "*" => Some(Self::Multiplication),
            "/" => Some(Self::Division),
            _ => None,
        }
    }

    /// The dataset class naming operations of this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
        }
    }

    /// Parses a dataset class name.
    #[must_use]
    pub fn from_class_name(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.class_name() == class)
    }

    /// Applies the operation. Division by zero follows IEEE-754; callers
    /// are expected to block it before getting here.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Addition => a + b,
            Self::Subtraction => a - b,
            Self::Multiplication => a * b,
            Self::Division => a / b,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addition => write!(f, "addition"),
            Self::Subtraction => write!(f, "subtraction"),
            Self::Multiplication => write!(f, "multiplication"),
            Self::Division => write!(f, "division"),
        }
    }
}

/// Textual attributes carried by rules and error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Rule heading (`ruleName`).
    RuleName,
    /// Rule statement (`ruleText`).
    RuleText,
    /// Worked example problem (`exampleProblem`).
    ExampleProblem,
    /// Worked example steps (`exampleSteps`).
    ExampleSteps,
    /// Error lookup name (`errorName`).
    ErrorName,
    /// Error hint text (`errorHint`).
    ErrorHint,
}

impl Attribute {
    /// All attributes.
    pub const ALL: [Self; 6] = [
        Self::RuleName,
        Self::RuleText,
        Self::ExampleProblem,
        Self::ExampleSteps,
        Self::ErrorName,
        Self::ErrorHint,
    ];

    /// The dataset predicate carrying this attribute.
    #[must_use]
    pub const fn predicate(self) -> &'static str {
        match self {
            Self::RuleName => "ruleName",
            Self::RuleText => "ruleText",
            Self::ExampleProblem => "exampleProblem",
            Self::ExampleSteps => "exampleSteps",
            Self::ErrorName => "errorName",
            Self::ErrorHint => "errorHint",
        }
    }

    /// Parses a dataset predicate into an attribute.
    #[must_use]
    pub fn from_predicate(predicate: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.predicate() == predicate)
    }

    /// The entity kind this attribute is defined on.
    #[must_use]
    pub const fn domain(self) -> EntityKind {
        match self {
            Self::RuleName | Self::RuleText | Self::ExampleProblem | Self::ExampleSteps => {
                EntityKind::Rule
            }
            Self::ErrorName | Self::ErrorHint => EntityKind::ErrorType,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.predicate())
    }
}

/// Single-valued textual attributes of one entity.
pub type Attributes = BTreeMap<Attribute, String>;

/// An arithmetic operation individual.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub(crate) key: String,
    pub(crate) kind: OperationKind,
    pub(crate) rule: Option<RuleId>,
    pub(crate) errors: Vec<ErrorTypeId>,
}

impl Operation {
    /// The dataset identifier of this operation (e.g. `Add`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Which arithmetic this operation performs.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The associated rule, if the dataset declares one.
    #[must_use]
    pub const fn rule(&self) -> Option<RuleId> {
        self.rule
    }

    /// Associated error types, in dataset order.
    #[must_use]
    pub fn errors(&self) -> &[ErrorTypeId] {
        &self.errors
    }
}

/// The teaching content for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub(crate) key: String,
    pub(crate) attributes: Attributes,
}

impl Rule {
    /// The dataset identifier of this rule.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Declared attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A named category of student mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorType {
    pub(crate) key: String,
    pub(crate) attributes: Attributes,
}

impl ErrorType {
    /// The dataset identifier of this error type.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The error name used as a lookup key, if declared.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.get(&Attribute::ErrorName).map(String::as_str)
    }

    /// Declared attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip() {
        for kind in OperationKind::ALL {
            let symbol = kind.symbol().to_string();
            assert_eq!(OperationKind::from_symbol(&symbol), Some(kind));
        }
    }

    #[test]
    fn test_unknown_symbols() {
        for symbol in ["%", "", "x", "++", " +", "÷"] {
            assert_eq!(OperationKind::from_symbol(symbol), None, "{symbol:?}");
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(OperationKind::Addition.apply(7.0, 5.0), 12.0);
        assert_eq!(OperationKind::Subtraction.apply(10.0, 3.0), 7.0);
        assert_eq!(OperationKind::Multiplication.apply(6.0, 4.0), 24.0);
        assert_eq!(OperationKind::Division.apply(12.0, 4.0), 3.0);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(
            OperationKind::from_class_name("Division"),
            Some(OperationKind::Division)
        );
        assert_eq!(OperationKind::from_class_name("Operation"), None);
    }

    #[test]
    fn test_attribute_predicates() {
        assert_eq!(
            Attribute::from_predicate("exampleSteps"),
            Some(Attribute::ExampleSteps)
        );
        assert_eq!(Attribute::from_predicate("hasRule"), None);
        assert_eq!(Attribute::ErrorHint.domain(), EntityKind::ErrorType);
        assert_eq!(Attribute::RuleName.domain(), EntityKind::Rule);
    }

    #[test]
    fn test_entity_ref_kind() {
        let r: EntityRef = RuleId::from_index(2).into();
        assert_eq!(r.kind(), EntityKind::Rule);
        assert_eq!(RuleId::from_index(2).to_string(), "rule#2");
    }
}
