use crate::domain::model::CatalogDocument;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the catalog document lives. Every command loads it fresh and saves it whole.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<CatalogDocument>> + Send;
    fn save(
        &self,
        document: &CatalogDocument,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// The chat side of a command: whatever delivers text back to the sender.
#[async_trait]
pub trait Replier: Send + Sync {
    async fn reply(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> &str;
    fn command_prefixes(&self) -> &[String];
    fn owner_ids(&self) -> &[String];

    fn is_owner(&self, sender: &str) -> bool {
        self.owner_ids().iter().any(|id| id == sender)
    }
}
