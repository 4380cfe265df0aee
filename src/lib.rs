//! # arith-tutor - Arithmetic tutoring over a typed knowledge base
//!
//! Given two operands and an operator symbol, the tutor computes the
//! answer and returns pedagogical feedback: the rule for the operation,
//! a worked example, and targeted hints for common mistakes. All of the
//! teaching content lives in a small, read-only fact store.
//!
//! ## Core Concepts
//!
//! - **Operation**: one of addition, subtraction, multiplication, division
//! - **Rule**: teaching content (name, text, worked example) for an operation
//! - **ErrorType**: a named student mistake carrying a hint
//! - **Fact Store**: the immutable arena holding all of the above
//!
//! ## Usage
//!
//! ```
//! use arith_tutor::{explain_rule, hint_for, FactStore, InMemoryFactStore};
//!
//! let store = InMemoryFactStore::load()?;
//! let divide = store.operation_by_symbol("/")?;
//!
//! assert!(explain_rule(&store, divide).starts_with("Division rule"));
//! assert_eq!(
//!     hint_for(&store, divide, "DivideByZero"),
//!     "Division by zero is undefined. The divisor must be non-zero."
//! );
//! # Ok::<(), arith_tutor::TutorError>(())
//! ```
//!
//! Datasets can also be built in code and loaded the same way:
//!
//! ```
//! use arith_tutor::{Dataset, FactStore, InMemoryFactStore, Triple, TutorResult};
//!
//! fn adds_only() -> TutorResult<InMemoryFactStore> {
//!     let ds = Dataset::new("adds-only").with(Triple::reference("Add", "type", "Addition"));
//!     Ok(InMemoryFactStore::from_dataset(&ds)?)
//! }
//!
//! let store = adds_only()?;
//! assert!(store.operation_by_symbol("+").is_ok());
//! assert!(store.operation_by_symbol("-").is_err());
//! # Ok::<(), arith_tutor::TutorError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod storage;
pub mod tutor;

// Re-export primary types at crate root for convenience
pub use config::{OutputFormat, TutorConfig};
pub use dataset::{Dataset, Term, Triple};
pub use entity::{
    Attribute, EntityKind, EntityRef, ErrorType, ErrorTypeId, Operation, OperationId,
    OperationKind, Rule, RuleId,
};
pub use error::{LoadError, NotFound, TutorError, TutorResult, ValidationError};
pub use storage::{DatasetSummary, FactStore, InMemoryFactStore};
pub use tutor::{explain_rule, hint_for, Feedback, Tutor, TutorRequest};
