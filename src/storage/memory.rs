//! In-memory fact store.
//!
//! Entities live in per-kind arenas addressed by index handles. The
//! store is built once by one of the `load`/`from_*` constructors and
//! never mutated afterwards, so it can be shared freely between threads
//! behind a plain reference or an `Arc`.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::dataset::{self, Dataset};
use crate::entity::{
    Attribute, EntityRef, ErrorType, ErrorTypeId, Operation, OperationId, OperationKind, Rule,
    RuleId,
};
use crate::error::{LoadError, NotFound};
use crate::storage::loader::{compile, Compiled};
use crate::storage::traits::FactStore;

/// Description of the dataset a store was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Dataset name.
    pub name: String,
    /// Dataset format version.
    pub version: u32,
    /// Number of source triples.
    pub triples: usize,
    /// Number of compiled operations.
    pub operations: usize,
    /// Number of compiled rules.
    pub rules: usize,
    /// Number of compiled error types.
    pub error_types: usize,
    /// BLAKE3 of the dataset's compact JSON form.
    pub fingerprint: String,
    /// When the store was built.
    pub loaded_at: DateTime<Utc>,
}

/// Immutable arena-backed fact store.
#[derive(Debug)]
pub struct InMemoryFactStore {
    operations: Vec<Operation>,
    rules: Vec<Rule>,
    error_types: Vec<ErrorType>,
    by_kind: HashMap<OperationKind, OperationId>,
    summary: DatasetSummary,
}

impl InMemoryFactStore {
    /// Load the built-in arithmetic dataset.
    ///
    /// # Errors
    /// Only if the embedded dataset is malformed.
    pub fn load() -> Result<Self, LoadError> {
        Self::from_dataset(&dataset::builtin()?)
    }

    /// Load a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_dataset(&dataset::from_json(json)?)
    }

    /// Load a dataset from a JSON file.
    ///
    /// The file is read fully and closed before parsing starts.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "read dataset file");
        Self::from_json(&json)
    }

    /// Compile an in-memory dataset.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, LoadError> {
        let Compiled {
            operations,
            rules,
            error_types,
            by_kind,
        } = compile(dataset)?;

        let summary = DatasetSummary {
            name: dataset.name.clone(),
            version: dataset.version,
            triples: dataset.len(),
            operations: operations.len(),
            rules: rules.len(),
            error_types: error_types.len(),
            fingerprint: dataset::fingerprint(dataset)?,
            loaded_at: Utc::now(),
        };
        debug!(
            name = %summary.name,
            version = summary.version,
            operations = summary.operations,
            rules = summary.rules,
            error_types = summary.error_types,
            fingerprint = %summary.fingerprint,
            "dataset loaded"
        );

        Ok(Self {
            operations,
            rules,
            error_types,
            by_kind,
            summary,
        })
    }

    /// Description of the loaded dataset.
    #[must_use]
    pub const fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    /// All operations with their handles, in dataset order.
    pub fn operations(&self) -> impl Iterator<Item = (OperationId, &Operation)> {
        self.operations
            .iter()
            .enumerate()
            .map(|(i, op)| (OperationId::from_index(i), op))
    }

    /// All error types with their handles, in dataset order.
    pub fn error_types(&self) -> impl Iterator<Item = (ErrorTypeId, &ErrorType)> {
        self.error_types
            .iter()
            .enumerate()
            .map(|(i, e)| (ErrorTypeId::from_index(i), e))
    }

    /// Find an error type by its `errorName`.
    #[must_use]
    pub fn error_by_name(&self, name: &str) -> Option<ErrorTypeId> {
        self.error_types
            .iter()
            .position(|e| e.name() == Some(name))
            .map(ErrorTypeId::from_index)
    }
}

impl FactStore for InMemoryFactStore {
    fn operation_of_kind(&self, kind: OperationKind) -> Result<OperationId, NotFound> {
        self.by_kind
            .get(&kind)
            .copied()
            .ok_or(NotFound::Kind { kind })
    }

    fn operation(&self, id: OperationId) -> Option<&Operation> {
        self.operations.get(id.index())
    }

    fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.index())
    }

    fn error_type(&self, id: ErrorTypeId) -> Option<&ErrorType> {
        self.error_types.get(id.index())
    }

    fn rule_of(&self, op: OperationId) -> Result<RuleId, NotFound> {
        let operation = self.operation(op).ok_or(NotFound::Operation { id: op })?;
        operation.rule().ok_or_else(|| {
            trace!(operation = %operation.key(), "operation has no rule");
            NotFound::Rule { id: op }
        })
    }

    fn errors_of(&self, op: OperationId) -> &[ErrorTypeId] {
        self.operation(op).map(Operation::errors).unwrap_or(&[])
    }

    fn attribute<'a>(&'a self, entity: EntityRef, attribute: Attribute, default: &'a str) -> &'a str {
        let attributes = match entity {
            EntityRef::Rule(id) => self.rule(id).map(Rule::attributes),
            EntityRef::ErrorType(id) => self.error_type(id).map(ErrorType::attributes),
            // Operations carry no textual attributes.
            EntityRef::Operation(_) => None,
        };
        attributes
            .and_then(|a| a.get(&attribute))
            .map_or(default, String::as_str)
    }
}
