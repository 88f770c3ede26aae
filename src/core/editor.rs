use crate::domain::model::Service;
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub category_created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub category_removed: bool,
}

/// Applies add/delete mutations as one load-modify-save cycle per call.
///
/// Rejected mutations return before `save`, so the stored document is only
/// written when something actually changed.
pub struct CatalogEditor<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn add_service(&self, category: &str, service: Service) -> Result<AddOutcome> {
        let mut document = self.store.load().await?;

        let id = service.id.clone();
        let category_created = document.add_service(category, service)?;
        if category_created {
            tracing::debug!("Creating category '{}'", category);
        }

        self.store.save(&document).await?;
        tracing::info!("Added service '{}' to category '{}'", id, category);

        Ok(AddOutcome { category_created })
    }

    pub async fn delete_service(&self, category: &str, id: &str) -> Result<DeleteOutcome> {
        let mut document = self.store.load().await?;

        let category_removed = document.remove_service(category, id)?;
        if category_removed {
            tracing::debug!("Category '{}' is empty, removing it", category);
        }

        self.store.save(&document).await?;
        tracing::info!("Deleted service '{}' from category '{}'", id, category);

        Ok(DeleteOutcome { category_removed })
    }
}
