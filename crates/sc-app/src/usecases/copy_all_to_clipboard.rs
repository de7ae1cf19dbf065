use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use sc_core::ports::{ClipboardChangeOriginPort, SystemClipboardPort};
use sc_core::ClipboardChangeOrigin;

use crate::history::SharedHistory;

/// How long the copy-all mark waits for the clipboard change it announces.
pub const COPY_ALL_ORIGIN_TTL: Duration = Duration::from_secs(2);

/// Writes every history entry, newline-separated and in history order, to
/// the system clipboard.
///
/// Selection in the shell is ignored: copy all always means all entries.
pub struct CopyAllToSystemClipboard {
    history: SharedHistory,
    clipboard: Arc<dyn SystemClipboardPort>,
    change_origin: Arc<dyn ClipboardChangeOriginPort>,
}

impl CopyAllToSystemClipboard {
    pub fn new(
        history: SharedHistory,
        clipboard: Arc<dyn SystemClipboardPort>,
        change_origin: Arc<dyn ClipboardChangeOriginPort>,
    ) -> Self {
        Self {
            history,
            clipboard,
            change_origin,
        }
    }

    /// Returns the number of entries written. An empty history leaves the
    /// clipboard untouched and returns `0`.
    #[tracing::instrument(name = "usecase.copy_all_to_clipboard.execute", skip(self))]
    pub async fn execute(&self) -> Result<usize> {
        let history = self.history.lock().await;
        if history.is_empty() {
            debug!("history is empty, nothing to copy");
            return Ok(0);
        }

        let text = history.joined();
        let count = history.len();

        // A write that changes nothing is never reported, so it must not
        // leave a mark behind either.
        match self.clipboard.read_text() {
            Ok(Some(current)) if current == text => {
                debug!(entries = count, "clipboard already holds the joined history");
                return Ok(count);
            }
            Ok(_) => {}
            Err(err) => debug!(error = %err, "reading clipboard before copy-all failed"),
        }

        // The mark must be in place before the write, or the watcher can
        // report the change first.
        self.change_origin
            .set_next_origin(ClipboardChangeOrigin::CopyAll, &text, COPY_ALL_ORIGIN_TTL)
            .await;

        if let Err(err) = self.clipboard.write_text(&text) {
            self.change_origin.clear_next_origin().await;
            return Err(err).context("write joined history to clipboard failed");
        }

        info!(entries = count, bytes = text.len(), "copied all history entries");
        Ok(count)
    }
}
