use crate::domain::ports::DisplaySink;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A display sink that records everything it is shown.
///
/// Cloning yields another handle onto the same recording, so a test can
/// hand one clone to the controller and inspect the other afterwards.
#[derive(Default, Clone)]
pub struct MemorySink {
    frames: Arc<RwLock<Vec<String>>>,
    cleared: Arc<RwLock<usize>>,
    result: Arc<RwLock<Option<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame shown, in order.
    pub async fn frames(&self) -> Vec<String> {
        self.frames.read().await.clone()
    }

    /// How many frames were erased again.
    pub async fn cleared(&self) -> usize {
        *self.cleared.read().await
    }

    /// The single result line, if the session got that far.
    pub async fn result(&self) -> Option<String> {
        self.result.read().await.clone()
    }
}

#[async_trait]
impl DisplaySink for MemorySink {
    async fn show_frame(&mut self, line: &str) -> Result<()> {
        self.frames.write().await.push(line.to_string());
        Ok(())
    }

    async fn clear_frame(&mut self) -> Result<()> {
        *self.cleared.write().await += 1;
        Ok(())
    }

    async fn show_result(&mut self, line: &str) -> Result<()> {
        *self.result.write().await = Some(line.to_string());
        Ok(())
    }
}
