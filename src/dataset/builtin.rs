//! The arithmetic knowledge base shipped with the crate.

use crate::dataset::serialization::from_json;
use crate::dataset::triple::Dataset;
use crate::error::LoadError;

/// Raw JSON of the built-in dataset, embedded at compile time.
pub const BUILTIN_DATASET_JSON: &str = include_str!("../../data/arithmetic.json");

/// Parses the built-in dataset.
pub fn builtin() -> Result<Dataset, LoadError> {
    from_json(BUILTIN_DATASET_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::validation::validate;

    #[test]
    fn builtin_parses_and_validates() {
        let ds = builtin().unwrap();
        assert_eq!(ds.name, "arithmetic-its");
        assert_eq!(ds.version, 1);
        validate(&ds).unwrap();
    }
}
