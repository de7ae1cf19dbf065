use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use sc_core::ports::{ClipboardChangeHandler, SystemClipboardPort, WatcherControlPort};
use sc_platform::{InMemoryWatcherControl, PlatformCommand, PlatformRuntime, WatcherMode};
use tokio::sync::mpsc;
use tokio::time::timeout;

#[derive(Default)]
struct SharedClipboard {
    text: Mutex<Option<String>>,
}

impl SystemClipboardPort for SharedClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        Ok(self.text.lock().unwrap().clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        *self.text.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct Forward(mpsc::Sender<Option<String>>);

#[async_trait::async_trait]
impl ClipboardChangeHandler for Forward {
    async fn on_clipboard_changed(&self, text: Option<String>) -> Result<()> {
        self.0.send(text).await?;
        Ok(())
    }
}

#[tokio::test]
async fn watcher_control_drives_polling_runtime() {
    let clipboard = Arc::new(SharedClipboard::default());
    let (event_tx, event_rx) = mpsc::channel(16);
    let (command_tx, command_rx) = mpsc::channel(16);
    let (seen_tx, mut seen_rx) = mpsc::channel(16);

    let runtime = PlatformRuntime::new(
        clipboard.clone(),
        event_tx,
        event_rx,
        command_rx,
        Arc::new(Forward(seen_tx)),
        WatcherMode::Polling {
            interval: Duration::from_millis(10),
        },
    );
    let runtime_task = tokio::spawn(runtime.start());

    let control = InMemoryWatcherControl::new(command_tx.clone());
    control.start_watcher().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    clipboard.write_text("first").unwrap();
    let seen = timeout(Duration::from_secs(1), seen_rx.recv())
        .await
        .expect("no change reported")
        .unwrap();
    assert_eq!(seen.as_deref(), Some("first"));

    control.stop_watcher().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    clipboard.write_text("while stopped").unwrap();
    assert!(timeout(Duration::from_millis(100), seen_rx.recv())
        .await
        .is_err());

    command_tx.send(PlatformCommand::Shutdown).await.unwrap();
    timeout(Duration::from_millis(500), runtime_task)
        .await
        .expect("runtime did not shut down")
        .unwrap();

    assert!(matches!(
        control.start_watcher().await,
        Err(sc_core::ports::WatcherControlError::ChannelClosed)
    ));
}
