use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use sc_core::ports::{ClipboardChangeHandler, ClipboardChangeOriginPort, HistoryViewPort};
use sc_core::ClipboardChangeOrigin;

use crate::history::SharedHistory;

/// Reacts to a local clipboard change.
///
/// ```text
/// OS clipboard change
///   → platform watcher reads the text
///   → CaptureClipboardText (this use case)
///   → HistoryStore::observe → HistoryViewPort::entry_appended
/// ```
///
/// Changes written by SuperCopy itself (copy all) are skipped before they
/// reach the store.
pub struct CaptureClipboardText {
    history: SharedHistory,
    change_origin: Arc<dyn ClipboardChangeOriginPort>,
    view: Arc<dyn HistoryViewPort>,
}

impl CaptureClipboardText {
    pub fn new(
        history: SharedHistory,
        change_origin: Arc<dyn ClipboardChangeOriginPort>,
        view: Arc<dyn HistoryViewPort>,
    ) -> Self {
        Self {
            history,
            change_origin,
            view,
        }
    }

    /// Returns `true` when the text was appended to history.
    #[tracing::instrument(name = "usecase.capture_clipboard_text.execute", skip_all)]
    pub async fn execute(&self, text: Option<String>) -> Result<bool> {
        let origin = self
            .change_origin
            .consume_origin_or_default(text.as_deref(), ClipboardChangeOrigin::LocalCapture)
            .await;

        if !origin.is_capturable() {
            debug!(origin = origin.as_str(), "skipping self-originated clipboard change");
            return Ok(false);
        }

        let mut history = self.history.lock().await;
        if !history.observe(text.as_deref()) {
            debug!("clipboard change not novel");
            return Ok(false);
        }

        if let Some(entry) = history.last_accepted() {
            info!(entries = history.len(), chars = entry.chars().count(), "captured clipboard entry");
            self.view.entry_appended(entry.as_str());
        }

        Ok(true)
    }
}

#[async_trait::async_trait]
impl ClipboardChangeHandler for CaptureClipboardText {
    async fn on_clipboard_changed(&self, text: Option<String>) -> Result<()> {
        self.execute(text).await.map(|_| ())
    }
}
