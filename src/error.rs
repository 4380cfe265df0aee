//! Error types for the tutor.
//!
//! All errors are strongly typed using thiserror. Lookup misses are
//! modelled as [`NotFound`] values rather than failures: callers always
//! have a defined fallback for them.

use std::path::PathBuf;

use thiserror::Error;

use crate::entity::{OperationId, OperationKind};

/// A lookup against the fact store found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    /// The symbol is not one of `+ - * /`.
    #[error("Unrecognized operator symbol '{symbol}'")]
    Symbol {
        /// Symbol as given.
        symbol: String,
    },

    /// The handle does not belong to this store.
    #[error("Operation not found: {id}")]
    Operation {
        /// Operation handle.
        id: OperationId,
    },

    /// The operation has no `hasRule` link.
    #[error("No rule associated with operation {id}")]
    Rule {
        /// Operation handle.
        id: OperationId,
    },

    /// The dataset declares no operation of this kind.
    #[error("No {kind} operation in the dataset")]
    Kind {
        /// Operation kind.
        kind: OperationKind,
    },
}

/// Errors raised while loading a dataset into a fact store.
///
/// Loading is all-or-nothing: any of these aborts the load and no
/// partially built store is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON is not a dataset.
    #[error("Malformed dataset: {message}")]
    Parse {
        /// Description.
        message: String,
    },

    /// A subject, predicate, or reference is not a valid identifier.
    #[error("Invalid identifier '{ident}'")]
    InvalidIdentifier {
        /// Offending identifier.
        ident: String,
    },

    /// A literal exceeds [`crate::dataset::MAX_LITERAL_LEN`].
    #[error("Literal for '{subject}' exceeds maximum length of {max_length}")]
    LiteralTooLong {
        /// Subject identifier.
        subject: String,
        /// Maximum allowed length.
        max_length: usize,
    },

    /// The dataset exceeds [`crate::dataset::MAX_TRIPLES`].
    #[error("Dataset has {actual} triples, maximum is {max}")]
    TooManyTriples {
        /// Triples in the dataset.
        actual: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// A predicate outside the vocabulary.
    #[error("Unknown predicate '{predicate}'")]
    UnknownPredicate {
        /// Predicate identifier.
        predicate: String,
    },

    /// A `type` triple names an unknown class.
    #[error("Unknown class '{class}' for subject '{subject}'")]
    UnknownClass {
        /// Subject identifier.
        subject: String,
        /// Class name.
        class: String,
    },

    /// A subject has facts but no `type`.
    #[error("Subject '{subject}' has no type")]
    Untyped {
        /// Subject identifier.
        subject: String,
    },

    /// A subject has more than one `type`.
    #[error("Subject '{subject}' is typed more than once")]
    ConflictingType {
        /// Subject identifier.
        subject: String,
    },

    /// A literal where a reference is expected, or the reverse.
    #[error("Predicate '{predicate}' on '{subject}' expects a {expected}")]
    ObjectKindMismatch {
        /// Subject identifier.
        subject: String,
        /// Predicate identifier.
        predicate: String,
        /// What was expected.
        expected: &'static str,
    },

    /// A reference to an undeclared subject.
    #[error("'{subject}' {predicate} refers to unknown entity '{object}'")]
    DanglingReference {
        /// Subject identifier.
        subject: String,
        /// Predicate identifier.
        predicate: String,
        /// Referenced identifier.
        object: String,
    },

    /// A reference to an entity of the wrong kind.
    #[error("'{subject}' {predicate} must refer to a {expected}, '{object}' is not one")]
    WrongTargetKind {
        /// Subject identifier.
        subject: String,
        /// Predicate identifier.
        predicate: String,
        /// Referenced identifier.
        object: String,
        /// What was expected.
        expected: &'static str,
    },

    /// A predicate used on an entity kind it does not apply to.
    #[error("Predicate '{predicate}' does not apply to '{subject}'")]
    InapplicablePredicate {
        /// Subject identifier.
        subject: String,
        /// Predicate identifier.
        predicate: String,
    },

    /// A single-valued predicate given twice.
    #[error("Predicate '{predicate}' given more than once for '{subject}'")]
    DuplicateValue {
        /// Subject identifier.
        subject: String,
        /// Predicate identifier.
        predicate: String,
    },

    /// Two operations of the same kind.
    #[error("More than one {kind} operation ('{first}' and '{second}')")]
    DuplicateOperationKind {
        /// Operation kind.
        kind: OperationKind,
        /// First operation key.
        first: String,
        /// Second operation key.
        second: String,
    },

    /// Two error types share an `errorName`.
    #[error("Error name '{name}' is used by more than one error type")]
    DuplicateErrorName {
        /// Error name.
        name: String,
    },
}

/// Input validation errors raised by the tutoring front-end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An operand is not a number.
    #[error("{field} is not a valid number: '{input}'")]
    InvalidNumber {
        /// Field label.
        field: &'static str,
        /// Raw input.
        input: String,
    },
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Loading the dataset failed.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Student input was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A lookup found nothing.
    #[error("Lookup error: {0}")]
    NotFound(#[from] NotFound),

    /// An invariant was broken.
    #[error("Internal error: {message}")]
    Internal {
        /// Description.
        message: String,
    },
}

impl TutorError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a load error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a lookup miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for tutor operations.
pub type TutorResult<T> = Result<T, TutorError>;
