//! Use case for starting the clipboard watcher

use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use sc_core::ports::{WatcherControlError, WatcherControlPort};

/// Error type for clipboard watcher startup failures.
#[derive(Debug, thiserror::Error)]
pub enum StartClipboardWatcherError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),
}

impl From<WatcherControlError> for StartClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StartClipboardWatcherError::StartFailed(err.to_string())
    }
}

/// Requests the clipboard watcher to start through the [`WatcherControlPort`].
///
/// Starting an already-running watcher is safe.
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StartClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to start");

            self.watcher_control.start_watcher().await?;

            info!("Clipboard watcher start requested");
            Ok::<(), StartClipboardWatcherError>(())
        }
        .instrument(span)
        .await
    }
}
