use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tracing::trace;

use sc_core::ports::SystemClipboardPort;

/// The operating system clipboard, text only.
///
/// The context is created once and kept for the life of the process; on X11
/// the owning context is what serves pasted text to other applications.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("ClipboardContext::new failed: {e}"))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let ctx = self.context()?;
        if !ctx.has(ContentFormat::Text) {
            trace!("clipboard holds no text");
            return Ok(None);
        }
        let text = ctx
            .get_text()
            .map_err(|e| anyhow!("failed to read clipboard text: {e}"))?;
        Ok(Some(text))
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_text(text.to_string())
            .map_err(|e| anyhow!("failed to write clipboard text: {e}"))
    }
}
