use tokio::sync::mpsc;

use sc_core::ports::{WatcherControlError, WatcherControlPort};

use crate::ipc::PlatformCommand;

/// Watcher control that forwards lifecycle requests to the runtime's
/// command channel.
pub struct InMemoryWatcherControl {
    cmd_tx: mpsc::Sender<PlatformCommand>,
}

impl InMemoryWatcherControl {
    pub fn new(cmd_tx: mpsc::Sender<PlatformCommand>) -> Self {
        Self { cmd_tx }
    }

    async fn send(
        &self,
        command: PlatformCommand,
        on_error: fn(String) -> WatcherControlError,
    ) -> Result<(), WatcherControlError> {
        self.cmd_tx.send(command).await.map_err(|e| {
            if self.cmd_tx.is_closed() {
                WatcherControlError::ChannelClosed
            } else {
                on_error(e.to_string())
            }
        })
    }
}

#[async_trait::async_trait]
impl WatcherControlPort for InMemoryWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StartClipboardWatcher,
            WatcherControlError::StartFailed,
        )
        .await
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StopClipboardWatcher,
            WatcherControlError::StopFailed,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_and_stop_send_commands() {
        let (tx, mut rx) = mpsc::channel(4);
        let control = InMemoryWatcherControl::new(tx);

        control.start_watcher().await.unwrap();
        control.stop_watcher().await.unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            PlatformCommand::StartClipboardWatcher
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            PlatformCommand::StopClipboardWatcher
        );
    }

    #[tokio::test]
    async fn closed_runtime_is_reported() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        let control = InMemoryWatcherControl::new(tx);

        assert!(matches!(
            control.start_watcher().await,
            Err(WatcherControlError::ChannelClosed)
        ));
        assert!(matches!(
            control.stop_watcher().await,
            Err(WatcherControlError::ChannelClosed)
        ));
    }
}
