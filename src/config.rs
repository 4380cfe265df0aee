//! Runtime configuration for the tutor front-end.
//!
//! Settings come from the environment and the command line; the
//! binary resolves them into a [`TutorConfig`] once at startup and opens
//! the fact store from it.

use std::path::PathBuf;

use crate::error::LoadError;
use crate::storage::InMemoryFactStore;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ARITH_TUTOR_LOG";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How feedback is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Resolved front-end settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorConfig {
    /// Dataset file; the built-in dataset is used when `None`.
    pub dataset: Option<PathBuf>,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
    /// Feedback format.
    pub output: OutputFormat,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl TutorConfig {
    /// Defaults overlaid with [`LOG_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_env_filter(std::env::var(LOG_ENV).ok())
    }

    fn with_env_filter(value: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = value.filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }

    /// Sets the dataset file.
    #[must_use]
    pub fn dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(path.into());
        self
    }

    /// Sets the log filter.
    #[must_use]
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Builds the fact store this configuration points at.
    pub fn open_store(&self) -> Result<InMemoryFactStore, LoadError> {
        match &self.dataset {
            Some(path) => InMemoryFactStore::from_path(path),
            None => InMemoryFactStore::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TutorConfig::default();
        assert_eq!(config.dataset, None);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn env_filter_overrides_default() {
        assert_eq!(
            TutorConfig::with_env_filter(Some("arith_tutor=debug".to_string())).log_filter,
            "arith_tutor=debug"
        );
        assert_eq!(TutorConfig::with_env_filter(Some("  ".to_string())).log_filter, "warn");
        assert_eq!(TutorConfig::with_env_filter(None).log_filter, "warn");
    }

    #[test]
    fn builder_setters() {
        let config = TutorConfig::default()
            .dataset("kb.json")
            .log_filter("trace")
            .output(OutputFormat::Json);
        assert_eq!(config.dataset, Some(PathBuf::from("kb.json")));
        assert_eq!(config.log_filter, "trace");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn open_builtin_store() {
        let store = TutorConfig::default().open_store().unwrap();
        assert_eq!(store.summary().operations, 4);
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let config = TutorConfig::default().dataset("/definitely/not/here.json");
        assert!(matches!(config.open_store(), Err(LoadError::Io { .. })));
    }
}
