// Adapters layer: concrete implementations of the domain ports.

pub mod json_store;
pub mod memory_store;
pub mod reply;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use reply::{ConsoleReplier, RecordingReplier};
