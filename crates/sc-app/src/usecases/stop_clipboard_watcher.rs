use std::sync::Arc;
use tracing::info;
use sc_core::ports::{WatcherControlError, WatcherControlPort};

#[derive(Debug, thiserror::Error)]
pub enum StopClipboardWatcherError {
    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}

impl From<WatcherControlError> for StopClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StopClipboardWatcherError::StopFailed(err.to_string())
    }
}

/// Requests the clipboard watcher to stop. Idempotent.
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    #[tracing::instrument(name = "usecase.stop_clipboard_watcher.execute", skip(self))]
    pub async fn execute(&self) -> Result<(), StopClipboardWatcherError> {
        self.watcher_control.stop_watcher().await?;
        info!("Clipboard watcher stop requested");
        Ok(())
    }
}
