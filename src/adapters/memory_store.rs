use crate::domain::model::CatalogDocument;
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory catalog that counts every load and save.
///
/// Clones share the same document and counters, so a test can hand one
/// clone to the editor and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<Mutex<CatalogDocument>>,
    loads: Arc<AtomicUsize>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new(document: CatalogDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            ..Self::default()
        }
    }

    pub async fn snapshot(&self) -> CatalogDocument {
        self.document.lock().await.clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl CatalogStore for MemoryStore {
    async fn load(&self) -> Result<CatalogDocument> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.document.lock().await.clone())
    }

    async fn save(&self, document: &CatalogDocument) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.document.lock().await = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        tokio_test::block_on(async {
            let store = MemoryStore::default();
            let handle = store.clone();

            let mut doc = store.load().await.unwrap();
            doc.extra
                .insert("botName".to_string(), serde_json::json!("Tienda"));
            store.save(&doc).await.unwrap();

            assert_eq!(handle.load_count(), 1);
            assert_eq!(handle.save_count(), 1);
            assert_eq!(handle.snapshot().await.extra["botName"], "Tienda");
        });
    }
}
