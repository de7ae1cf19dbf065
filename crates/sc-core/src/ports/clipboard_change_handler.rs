//! Clipboard change handler port
//!
//! The platform layer (low-level) calls this abstraction; the app layer
//! (high-level) implements it.

use anyhow::Result;

/// Callback handler for clipboard change events.
///
/// The platform layer has already read the clipboard when it calls this.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// Called when clipboard content changes.
    ///
    /// # Parameters
    /// - `text`: clipboard text at the time of the change, `None` if non-textual
    async fn on_clipboard_changed(&self, text: Option<String>) -> Result<()>;
}
