//! Poll-and-compare clipboard observation.
//!
//! Used where native change notification is unavailable or unreliable.
//! Each tick reads the clipboard text and emits
//! `PlatformEvent::ClipboardChanged` only when it differs from the text seen
//! on the previous tick.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use sc_core::ports::SystemClipboardPort;

use crate::ipc::PlatformEvent;
use crate::runtime::PlatformEventSender;

pub struct PollingClipboardWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    tx: PlatformEventSender,
    last_seen: Mutex<Option<String>>,
}

impl PollingClipboardWatcher {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, tx: PlatformEventSender) -> Self {
        Self {
            clipboard,
            tx,
            last_seen: Mutex::new(None),
        }
    }

    /// Remember what is on the clipboard right now without emitting it.
    ///
    /// Called when polling starts so text copied before the watcher existed
    /// is not reported as a change.
    pub async fn prime(&self) -> Result<()> {
        let current = self.clipboard.read_text()?;
        *self.last_seen.lock().await = current;
        Ok(())
    }

    /// Check the clipboard once. Returns whether an event was emitted.
    pub async fn check_once(&self) -> Result<bool> {
        let current = self.clipboard.read_text()?;

        let mut last = self.last_seen.lock().await;
        if *last == current {
            return Ok(false);
        }
        *last = current.clone();
        drop(last);

        self.tx
            .send(PlatformEvent::ClipboardChanged { text: current })
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct Scripted {
        text: StdMutex<Option<String>>,
    }

    impl Scripted {
        fn set(&self, text: Option<&str>) {
            *self.text.lock().unwrap() = text.map(str::to_string);
        }
    }

    impl SystemClipboardPort for Scripted {
        fn read_text(&self) -> Result<Option<String>> {
            Ok(self.text.lock().unwrap().clone())
        }

        fn write_text(&self, text: &str) -> Result<()> {
            self.set(Some(text));
            Ok(())
        }
    }

    #[tokio::test]
    async fn emits_only_when_text_changes() {
        let clipboard = Arc::new(Scripted::default());
        let (tx, mut rx) = mpsc::channel(8);
        let watcher = PollingClipboardWatcher::new(clipboard.clone(), tx);

        clipboard.set(Some("foo"));
        assert!(watcher.check_once().await.unwrap());
        assert!(!watcher.check_once().await.unwrap());

        clipboard.set(Some("bar"));
        assert!(watcher.check_once().await.unwrap());

        assert_eq!(
            rx.recv().await.unwrap(),
            PlatformEvent::ClipboardChanged {
                text: Some("foo".to_string())
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            PlatformEvent::ClipboardChanged {
                text: Some("bar".to_string())
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn primed_text_is_not_reported() {
        let clipboard = Arc::new(Scripted::default());
        clipboard.set(Some("already there"));
        let (tx, mut rx) = mpsc::channel(8);
        let watcher = PollingClipboardWatcher::new(clipboard.clone(), tx);

        watcher.prime().await.unwrap();
        assert!(!watcher.check_once().await.unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn switching_to_non_text_is_a_change() {
        let clipboard = Arc::new(Scripted::default());
        clipboard.set(Some("foo"));
        let (tx, mut rx) = mpsc::channel(8);
        let watcher = PollingClipboardWatcher::new(clipboard.clone(), tx);
        watcher.prime().await.unwrap();

        clipboard.set(None);
        assert!(watcher.check_once().await.unwrap());
        assert_eq!(
            rx.recv().await.unwrap(),
            PlatformEvent::ClipboardChanged { text: None }
        );
    }
}
