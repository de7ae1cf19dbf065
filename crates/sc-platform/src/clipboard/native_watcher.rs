use std::sync::Arc;

use clipboard_rs::ClipboardHandler;
use tracing::warn;

use sc_core::ports::SystemClipboardPort;

use crate::ipc::PlatformEvent;
use crate::runtime::PlatformEventSender;

/// Handler registered with `clipboard_rs::ClipboardWatcherContext`.
///
/// Runs on the blocking watcher thread: it reads the text and pushes an
/// event into the runtime without awaiting.
pub struct NativeClipboardWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    sender: PlatformEventSender,
}

impl NativeClipboardWatcher {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, sender: PlatformEventSender) -> Self {
        Self { clipboard, sender }
    }

    pub(crate) fn notify(&self) {
        let event = match self.clipboard.read_text() {
            Ok(text) => PlatformEvent::ClipboardChanged { text },
            Err(e) => {
                warn!(error = %e, "failed to read clipboard after change");
                PlatformEvent::ClipboardChanged { text: None }
            }
        };

        if let Err(err) = self.sender.try_send(event) {
            warn!(error = %err, "dropping clipboard change event");
        }
    }
}

impl ClipboardHandler for NativeClipboardWatcher {
    fn on_clipboard_change(&mut self) {
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use tokio::sync::mpsc;

    struct Fixed(Option<&'static str>);

    impl SystemClipboardPort for Fixed {
        fn read_text(&self) -> Result<Option<String>> {
            Ok(self.0.map(str::to_string))
        }

        fn write_text(&self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl SystemClipboardPort for Broken {
        fn read_text(&self) -> Result<Option<String>> {
            Err(anyhow!("no display"))
        }

        fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow!("no display"))
        }
    }

    #[test]
    fn change_is_forwarded_with_current_text() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut watcher = NativeClipboardWatcher::new(Arc::new(Fixed(Some("hello"))), tx);

        watcher.on_clipboard_change();

        assert_eq!(
            rx.try_recv().unwrap(),
            PlatformEvent::ClipboardChanged {
                text: Some("hello".to_string())
            }
        );
    }

    #[test]
    fn read_failure_is_reported_as_no_text() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut watcher = NativeClipboardWatcher::new(Arc::new(Broken), tx);

        watcher.on_clipboard_change();

        assert_eq!(
            rx.try_recv().unwrap(),
            PlatformEvent::ClipboardChanged { text: None }
        );
    }

    #[test]
    fn full_channel_drops_event_without_panicking() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut watcher = NativeClipboardWatcher::new(Arc::new(Fixed(Some("x"))), tx);

        watcher.on_clipboard_change();
        watcher.on_clipboard_change();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
