use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use clipboard_rs::{ClipboardWatcher, ClipboardWatcherContext, WatcherShutdown};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use sc_core::ports::{ClipboardChangeHandler, SystemClipboardPort};

use super::event_bus::{PlatformCommandReceiver, PlatformEventReceiver, PlatformEventSender};
use crate::clipboard::{NativeClipboardWatcher, PollingClipboardWatcher};
use crate::ipc::{PlatformCommand, PlatformEvent};

/// Shortest polling period the watcher accepts.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How clipboard changes are noticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherMode {
    /// OS change notifications through `clipboard_rs::ClipboardWatcherContext`.
    Native,
    /// Read the clipboard every `interval` and compare with the previous read.
    Polling { interval: Duration },
}

enum RunningWatcher {
    Native {
        // `WatcherShutdown` is `Send` but not `Sync`; the runtime is shared
        // across awaits, so the handle sits behind a lock.
        shutdown: Mutex<WatcherShutdown>,
        join: JoinHandle<()>,
    },
    Polling {
        join: JoinHandle<()>,
    },
}

/// Platform event loop.
///
/// Owns the watcher and serializes clipboard-change events and commands,
/// handing each change to the registered `ClipboardChangeHandler` in turn.
pub struct PlatformRuntime {
    clipboard: Arc<dyn SystemClipboardPort>,
    event_tx: PlatformEventSender,
    event_rx: PlatformEventReceiver,
    command_rx: PlatformCommandReceiver,
    mode: WatcherMode,
    shutting_down: bool,
    watcher: Option<RunningWatcher>,
    clipboard_handler: Arc<dyn ClipboardChangeHandler>,
}

impl PlatformRuntime {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        event_tx: PlatformEventSender,
        event_rx: PlatformEventReceiver,
        command_rx: PlatformCommandReceiver,
        clipboard_handler: Arc<dyn ClipboardChangeHandler>,
        mode: WatcherMode,
    ) -> Self {
        Self {
            clipboard,
            event_tx,
            event_rx,
            command_rx,
            mode,
            shutting_down: false,
            watcher: None,
            clipboard_handler,
        }
    }

    pub fn watcher_running(&self) -> bool {
        self.watcher.is_some()
    }

    /// Run until a `Shutdown` command arrives or every command sender is gone.
    pub async fn start(mut self) {
        if let Err(err) = self.event_tx.try_send(PlatformEvent::Started) {
            warn!(error = %err, "failed to emit started event");
        }

        while !self.shutting_down {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event).await;
                }
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd).await,
                    None => {
                        debug!("command channel closed");
                        self.shutting_down = true;
                    }
                },
            }
        }

        self.stop_clipboard_watcher();
        self.handle_event(PlatformEvent::Stopped).await;
    }

    fn start_clipboard_watcher(&mut self) -> Result<()> {
        if self.watcher.is_some() {
            debug!("Clipboard watcher already running, skipping start");
            return Ok(());
        }

        let running = match self.mode {
            WatcherMode::Native => self.start_native_watcher()?,
            WatcherMode::Polling { interval } => self.start_polling_watcher(interval),
        };
        self.watcher = Some(running);
        info!(mode = ?self.mode, "Clipboard watcher started");
        Ok(())
    }

    fn start_native_watcher(&self) -> Result<RunningWatcher> {
        let mut watcher_ctx = ClipboardWatcherContext::new()
            .map_err(|e| anyhow!("Failed to create watcher context: {e}"))?;

        let handler = NativeClipboardWatcher::new(self.clipboard.clone(), self.event_tx.clone());
        let shutdown = watcher_ctx.add_handler(handler).get_shutdown_channel();

        let join = tokio::task::spawn_blocking(move || {
            info!("start clipboard watch");
            watcher_ctx.start_watch();
            info!("clipboard watch stopped");
        });

        Ok(RunningWatcher::Native {
            shutdown: Mutex::new(shutdown),
            join,
        })
    }

    fn start_polling_watcher(&self, period: Duration) -> RunningWatcher {
        let watcher = PollingClipboardWatcher::new(self.clipboard.clone(), self.event_tx.clone());

        let join = tokio::spawn(async move {
            if let Err(err) = watcher.prime().await {
                warn!(error = %err, "failed to read initial clipboard text");
            }

            let mut ticker = interval(period.max(MIN_POLL_INTERVAL));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if let Err(err) = watcher.check_once().await {
                    warn!(error = %err, "clipboard check failed");
                }
            }
        });

        RunningWatcher::Polling { join }
    }

    fn stop_clipboard_watcher(&mut self) {
        match self.watcher.take() {
            Some(RunningWatcher::Native { shutdown, join }) => {
                match shutdown.into_inner() {
                    Ok(shutdown) => shutdown.stop(),
                    Err(poisoned) => poisoned.into_inner().stop(),
                }
                drop(join);
                info!("Clipboard watcher stopped");
            }
            Some(RunningWatcher::Polling { join }) => {
                join.abort();
                info!("Clipboard watcher stopped");
            }
            None => debug!("Clipboard watcher already stopped"),
        }
    }

    async fn handle_event(&self, event: PlatformEvent) {
        match event {
            PlatformEvent::ClipboardChanged { text } => {
                debug!(
                    has_text = text.is_some(),
                    len = text.as_deref().map_or(0, str::len),
                    "Clipboard changed"
                );
                if let Err(e) = self.clipboard_handler.on_clipboard_changed(text).await {
                    error!(error = %e, "Failed to handle clipboard change");
                }
            }
            PlatformEvent::Started => {
                info!("Platform runtime started");
            }
            PlatformEvent::Stopped => {
                info!("Platform runtime stopped");
            }
            PlatformEvent::Error { message } => {
                error!(error = %message, "Platform error");
            }
        }
    }

    async fn handle_command(&mut self, command: PlatformCommand) {
        match command {
            PlatformCommand::Shutdown => {
                self.shutting_down = true;
                info!("Platform runtime shutting down");
            }
            PlatformCommand::StartClipboardWatcher => {
                debug!("StartClipboardWatcher command received");
                if let Err(e) = self.start_clipboard_watcher() {
                    self.report(format!("Failed to start clipboard watcher: {e}"));
                }
            }
            PlatformCommand::StopClipboardWatcher => {
                debug!("StopClipboardWatcher command received");
                self.stop_clipboard_watcher();
            }
        }
    }

    fn report(&self, message: String) {
        if let Err(err) = self.event_tx.try_send(PlatformEvent::Error { message }) {
            warn!(error = %err, "Failed to emit platform error event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::event_bus::PlatformCommandSender;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    #[derive(Default)]
    struct TestClipboard {
        text: Mutex<Option<String>>,
    }

    impl SystemClipboardPort for TestClipboard {
        fn read_text(&self) -> Result<Option<String>> {
            Ok(self.text.lock().expect("text lock").clone())
        }

        fn write_text(&self, text: &str) -> Result<()> {
            *self.text.lock().expect("text lock") = Some(text.to_string());
            Ok(())
        }
    }

    struct TestHandler {
        tx: mpsc::Sender<Option<String>>,
    }

    #[async_trait::async_trait]
    impl ClipboardChangeHandler for TestHandler {
        async fn on_clipboard_changed(&self, text: Option<String>) -> Result<()> {
            self.tx
                .send(text)
                .await
                .map_err(|err| anyhow!("handler send failed: {err}"))
        }
    }

    fn build_runtime(
        clipboard: Arc<TestClipboard>,
        mode: WatcherMode,
    ) -> (
        PlatformRuntime,
        PlatformCommandSender,
        mpsc::Receiver<Option<String>>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(8);
        let (command_tx, command_rx) = mpsc::channel(8);
        let (handler_tx, handler_rx) = mpsc::channel(8);
        let runtime = PlatformRuntime::new(
            clipboard,
            event_tx,
            event_rx,
            command_rx,
            Arc::new(TestHandler { tx: handler_tx }),
            mode,
        );
        (runtime, command_tx, handler_rx)
    }

    fn polling() -> WatcherMode {
        WatcherMode::Polling {
            interval: Duration::from_millis(10),
        }
    }

    #[tokio::test]
    async fn watcher_start_and_stop_are_idempotent() {
        let clipboard = Arc::new(TestClipboard::default());
        let (mut runtime, _command_tx, _handler_rx) = build_runtime(clipboard, polling());

        runtime
            .handle_command(PlatformCommand::StartClipboardWatcher)
            .await;
        runtime
            .handle_command(PlatformCommand::StartClipboardWatcher)
            .await;
        assert!(runtime.watcher_running());

        runtime
            .handle_command(PlatformCommand::StopClipboardWatcher)
            .await;
        assert!(!runtime.watcher_running());
        runtime
            .handle_command(PlatformCommand::StopClipboardWatcher)
            .await;
        assert!(!runtime.watcher_running());
    }

    #[tokio::test]
    async fn polling_watcher_reports_new_text_only() {
        let clipboard = Arc::new(TestClipboard::default());
        *clipboard.text.lock().unwrap() = Some("before start".to_string());
        let (runtime, command_tx, mut handler_rx) = build_runtime(clipboard.clone(), polling());
        let runtime_task = tokio::spawn(runtime.start());

        command_tx
            .send(PlatformCommand::StartClipboardWatcher)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        *clipboard.text.lock().unwrap() = Some("copied".to_string());

        let received = timeout(Duration::from_secs(1), handler_rx.recv())
            .await
            .expect("handler recv timeout")
            .expect("handler recv");
        assert_eq!(received.as_deref(), Some("copied"));

        command_tx.send(PlatformCommand::Shutdown).await.unwrap();
        timeout(Duration::from_millis(500), runtime_task)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn zero_polling_interval_still_reports_changes() {
        let clipboard = Arc::new(TestClipboard::default());
        let mode = WatcherMode::Polling {
            interval: Duration::ZERO,
        };
        let (runtime, command_tx, mut handler_rx) = build_runtime(clipboard.clone(), mode);
        let runtime_task = tokio::spawn(runtime.start());

        command_tx
            .send(PlatformCommand::StartClipboardWatcher)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        *clipboard.text.lock().unwrap() = Some("after start".to_string());

        let received = timeout(Duration::from_secs(1), handler_rx.recv())
            .await
            .expect("polling task stopped reporting")
            .expect("handler recv");
        assert_eq!(received.as_deref(), Some("after start"));

        command_tx.send(PlatformCommand::Shutdown).await.unwrap();
        timeout(Duration::from_millis(500), runtime_task)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn dropping_every_command_sender_stops_the_loop() {
        let clipboard = Arc::new(TestClipboard::default());
        let (runtime, command_tx, _handler_rx) = build_runtime(clipboard, polling());
        let runtime_task = tokio::spawn(runtime.start());

        drop(command_tx);

        timeout(Duration::from_millis(500), runtime_task)
            .await
            .expect("runtime did not stop")
            .unwrap();
    }
}
