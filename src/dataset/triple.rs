//! Serialized knowledge-base representation.
//!
//! A dataset is a flat list of subject/predicate/object triples. It is
//! the interchange form only; the fact store compiles it into typed
//! records on load.

use serde::{Deserialize, Serialize};

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Term {
    /// Reference to another subject or to a class.
    Ref(String),
    /// Literal text.
    Literal(String),
}

impl Term {
    /// The referenced identifier, if this is a reference.
    #[must_use]
    pub fn as_ref_ident(&self) -> Option<&str> {
        match self {
            Self::Ref(v) => Some(v),
            Self::Literal(_) => None,
        }
    }

    /// The literal text, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(v) => Some(v),
            Self::Ref(_) => None,
        }
    }
}

/// A single subject/predicate/object fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    /// Subject identifier.
    pub subject: String,
    /// Predicate identifier.
    pub predicate: String,
    /// Object reference or literal.
    pub object: Term,
}

impl Triple {
    /// Creates a triple whose object refers to another identifier.
    #[must_use]
    pub fn reference(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Term::Ref(object.into()),
        }
    }

    /// Creates a triple whose object is literal text.
    #[must_use]
    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Term::Literal(value.into()),
        }
    }
}

fn default_version() -> u32 {
    1
}

/// A named, versioned collection of triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name, reported in the load summary.
    pub name: String,

    /// Format version; defaults to 1.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Facts, in file order.
    #[serde(default)]
    pub triples: Vec<Triple>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            triples: Vec::new(),
        }
    }

    /// Appends a triple, builder style.
    #[must_use]
    pub fn with(mut self, triple: Triple) -> Self {
        self.triples.push(triple);
        self
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if there are no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}
