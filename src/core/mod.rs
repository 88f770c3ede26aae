pub mod command;
pub mod editor;
pub mod handler;
pub mod plugin;

pub use crate::domain::model::{CatalogDocument, Service};
pub use crate::domain::ports::{CatalogStore, ConfigProvider, Replier};
pub use crate::utils::error::Result;
