use crate::domain::model::CatalogDocument;
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Catalog kept in a pretty-printed JSON file.
///
/// Saves overwrite the whole file in place. There is no locking, so two
/// writers racing on the same path can lose an update.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    async fn load(&self) -> Result<CatalogDocument> {
        let data = fs::read(&self.path).await?;
        tracing::debug!(
            "Read catalog from {} ({} bytes)",
            self.path.display(),
            data.len()
        );
        let document = serde_json::from_slice(&data)?;
        Ok(document)
    }

    async fn save(&self, document: &CatalogDocument) -> Result<()> {
        // to_string_pretty indents with two spaces
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json.as_bytes()).await?;
        tracing::debug!(
            "Wrote catalog to {} ({} bytes)",
            self.path.display(),
            json.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Service;
    use crate::utils::error::CatalogError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("configbot.json"));

        let mut doc = CatalogDocument::default();
        doc.add_service("STREAMING", Service::new("n1", "Netflix", "80 MX", 4, ""))
            .unwrap();

        store.save(&doc).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, doc);

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"services\": {"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("absent.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("configbot.json");
        std::fs::write(&path, "{ \"services\": ").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }
}
