//! Serialized form of the knowledge base.
//!
//! Datasets are JSON documents holding subject/predicate/object
//! triples. They can be embedded (the built-in arithmetic dataset) or
//! supplied from a file, and are compiled into a typed fact store by
//! `crate::storage`.

mod builtin;
mod serialization;
mod triple;
mod validation;
pub mod vocab;

pub use builtin::{builtin, BUILTIN_DATASET_JSON};
pub use serialization::{fingerprint, from_json, to_json_pretty};
pub use triple::{Dataset, Term, Triple};
pub use validation::{validate, validate_identifier, MAX_LITERAL_LEN, MAX_TRIPLES};
