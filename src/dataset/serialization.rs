//! Dataset serialization helpers.
//!
//! Serde provides the JSON mapping; this module centralizes the
//! conversions and error mapping used by the loader and the CLI.

use crate::dataset::triple::Dataset;
use crate::error::{LoadError, TutorError, TutorResult};

/// Serialize a dataset to pretty JSON.
pub fn to_json_pretty(dataset: &Dataset) -> TutorResult<String> {
    serde_json::to_string_pretty(dataset)
        .map_err(|e| TutorError::internal(format!("serialize dataset: {e}")))
}

/// Deserialize a dataset from JSON.
///
/// Only the JSON shape is checked here; callers should run
/// `validate` and then load it into a store.
pub fn from_json(s: &str) -> Result<Dataset, LoadError> {
    serde_json::from_str::<Dataset>(s).map_err(|e| LoadError::Parse {
        message: e.to_string(),
    })
}

/// Stable content fingerprint of a dataset (BLAKE3 over compact JSON).
pub fn fingerprint(dataset: &Dataset) -> Result<String, LoadError> {
    let bytes = serde_json::to_vec(dataset).map_err(|e| LoadError::Parse {
        message: format!("serialize dataset: {e}"),
    })?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::triple::Triple;

    #[test]
    fn malformed_json_is_parse_error() {
        let err = from_json("{\"name\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn missing_name_is_parse_error() {
        assert!(matches!(from_json("{\"triples\": []}"), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn pretty_output_reparses() {
        let ds = Dataset::new("t").with(Triple::reference("Add", "type", "Addition"));
        let json = to_json_pretty(&ds).unwrap();
        assert_eq!(from_json(&json).unwrap(), ds);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Dataset::new("t").with(Triple::literal("r", "ruleName", "A"));
        let b = Dataset::new("t").with(Triple::literal("r", "ruleName", "B"));
        assert_eq!(fingerprint(&a).unwrap(), fingerprint(&a.clone()).unwrap());
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
        assert_eq!(fingerprint(&a).unwrap().len(), 64);
    }
}
