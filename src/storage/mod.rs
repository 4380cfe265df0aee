//! Fact store: the typed, read-only knowledge base.
//!
//! `traits` defines the query contract, `memory` the arena-backed
//! implementation, and `loader` the dataset compiler behind it.

mod loader;
mod memory;
mod traits;

pub use memory::{DatasetSummary, InMemoryFactStore};
pub use traits::FactStore;
