pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::BotConfig;

pub use adapters::{ConsoleReplier, JsonFileStore, MemoryStore, RecordingReplier};
pub use crate::core::{
    editor::CatalogEditor,
    handler::{HandleOutcome, ServiceCommandHandler},
    plugin::PluginDescriptor,
};
pub use utils::error::{CatalogError, Result};
