//! Built-in seed events. Loaded once at startup, shared read-only via `Arc`.

use crate::domain::{DomainError, Event};
use std::path::Path;
use tracing::info;

const BUILTIN_SEED: &str = include_str!("../../assets/seed_events.json");

/// Immutable list of events bundled with the application, independent of the store.
#[derive(Debug, Clone, Default)]
pub struct SeedCatalog {
    events: Vec<Event>,
}

impl SeedCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// The list compiled into the binary.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Replace the built-in list with a JSON file of the same shape.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::Config(format!("read seed file {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), events = catalog.len(), "loaded seed events from file");
        Ok(catalog)
    }

    fn from_json(raw: &str) -> Result<Self, DomainError> {
        let events: Vec<Event> = serde_json::from_str(raw)
            .map_err(|e| DomainError::Config(format!("invalid seed events: {}", e)))?;
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_parses_with_unique_ids() {
        let seed = SeedCatalog::builtin().unwrap();
        assert!(!seed.is_empty());
        let ids: HashSet<&str> = seed.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[tokio::test]
    async fn test_from_path_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        tokio::fs::write(
            &path,
            r#"[{"id":"x","title":"Only","date":"2030-05-01","time":"09:00",
                "location":"Hall","description":"The only event","category":"Tech Talk"}]"#,
        )
        .await
        .unwrap();

        let seed = SeedCatalog::from_path(&path).await.unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed.events()[0].id, "x");
    }

    #[tokio::test]
    async fn test_bad_seed_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        tokio::fs::write(&path, r#"[{"id":"x"}]"#).await.unwrap();

        let err = SeedCatalog::from_path(&path).await.unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));

        let missing = SeedCatalog::from_path(dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(DomainError::Config(_))));
    }
}
