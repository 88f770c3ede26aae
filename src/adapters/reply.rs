use crate::domain::ports::Replier;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Prints each reply on stdout, one block per reply.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReplier;

impl ConsoleReplier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Replier for ConsoleReplier {
    async fn reply(&self, text: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        let line = format!("{}\n", text);
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| CatalogError::ReplyError {
                message: e.to_string(),
            })?;
        stdout.flush().await.map_err(|e| CatalogError::ReplyError {
            message: e.to_string(),
        })
    }
}

/// Keeps replies in memory, in the order they were sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingReplier {
    replies: Arc<Mutex<Vec<String>>>,
}

impl RecordingReplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replies(&self) -> Vec<String> {
        self.replies.lock().await.clone()
    }
}

#[async_trait]
impl Replier for RecordingReplier {
    async fn reply(&self, text: &str) -> Result<()> {
        self.replies.lock().await.push(text.to_string());
        Ok(())
    }
}
