//! Dependency assembly.
//!
//! The only place that depends on `sc-infra`, `sc-platform` and `sc-app`
//! together. It builds adapters and hands them to `App`; it makes no
//! decisions about what the application does with them.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sc_app::{App, AppDeps, AppPaths};
use sc_core::ports::{AppDirsPort, HistoryViewPort, SystemClipboardPort};
use sc_core::settings::{WatchMode, WatcherSettings};
use sc_infra::{FileSettingsRepository, InMemoryClipboardChangeOrigin};
use sc_platform::runtime::{
    PlatformCommandReceiver, PlatformCommandSender, PlatformEventReceiver, PlatformEventSender,
    MIN_POLL_INTERVAL,
};
use sc_platform::{
    DirsAppDirsAdapter, InMemoryWatcherControl, LocalClipboard, PlatformRuntime, WatcherMode,
};
use tokio::sync::mpsc;
use tracing::warn;

const CHANNEL_CAPACITY: usize = 64;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while building the dependency graph.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("App directories unavailable: {0}")]
    AppDirs(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Application plus the runtime pieces that are started separately.
pub struct WiredApp {
    pub app: Arc<App>,
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub command_tx: PlatformCommandSender,
    channels: RuntimeChannels,
}

struct RuntimeChannels {
    event_tx: PlatformEventSender,
    event_rx: PlatformEventReceiver,
    command_rx: PlatformCommandReceiver,
}

impl WiredApp {
    /// Build the platform runtime, with the capture use case as its change handler.
    pub fn into_runtime(
        self,
        watcher: &WatcherSettings,
    ) -> (Arc<App>, PlatformCommandSender, PlatformRuntime) {
        let RuntimeChannels {
            event_tx,
            event_rx,
            command_rx,
        } = self.channels;

        let runtime = PlatformRuntime::new(
            self.clipboard,
            event_tx,
            event_rx,
            command_rx,
            self.app.clipboard_change_handler(),
            watcher_mode(watcher),
        );

        (self.app, self.command_tx, runtime)
    }
}

/// Default per-user locations, with `--config` replacing the settings path.
pub fn resolve_app_paths(config_override: Option<&Path>) -> WiringResult<AppPaths> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    Ok(match config_override {
        Some(path) => paths.with_settings_path(path),
        None => paths,
    })
}

/// Settings files are hand-editable, so the polling period is raised to
/// `MIN_POLL_INTERVAL` when it is set lower.
pub fn watcher_mode(settings: &WatcherSettings) -> WatcherMode {
    match settings.mode {
        WatchMode::Native => WatcherMode::Native,
        WatchMode::Polling => {
            let mut interval = Duration::from_millis(settings.poll_interval_ms);
            if interval < MIN_POLL_INTERVAL {
                warn!(
                    poll_interval_ms = settings.poll_interval_ms,
                    min_ms = MIN_POLL_INTERVAL.as_millis() as u64,
                    "poll interval too short, using the minimum"
                );
                interval = MIN_POLL_INTERVAL;
            }
            WatcherMode::Polling { interval }
        }
    }
}

/// Wire against the real OS clipboard.
pub fn wire_dependencies(
    paths: &AppPaths,
    history_view: Arc<dyn HistoryViewPort>,
) -> WiringResult<WiredApp> {
    let clipboard = LocalClipboard::new()
        .map_err(|e| WiringError::ClipboardInit(format!("Failed to create clipboard: {e}")))?;

    Ok(wire_with_clipboard(paths, Arc::new(clipboard), history_view))
}

/// Wire against any clipboard implementation.
pub fn wire_with_clipboard(
    paths: &AppPaths,
    clipboard: Arc<dyn SystemClipboardPort>,
    history_view: Arc<dyn HistoryViewPort>,
) -> WiredApp {
    let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let deps = AppDeps {
        clipboard: clipboard.clone(),
        change_origin: Arc::new(InMemoryClipboardChangeOrigin::new()),
        watcher_control: Arc::new(InMemoryWatcherControl::new(command_tx.clone())),
        settings: Arc::new(FileSettingsRepository::new(paths.settings_path.clone())),
        history_view,
    };

    WiredApp {
        app: Arc::new(App::new(deps)),
        clipboard,
        command_tx,
        channels: RuntimeChannels {
            event_tx,
            event_rx,
            command_rx,
        },
    }
}
