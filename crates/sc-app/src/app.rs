use std::sync::Arc;

use crate::history::{new_shared_history, SharedHistory};
use crate::usecases::{
    CaptureClipboardText, ClearHistory, CopyAllToSystemClipboard, ListHistoryEntries,
    LoadSettings, PersistHistory, RestoreHistory, StartClipboardWatcher, StopClipboardWatcher,
};
use crate::AppDeps;

/// The application: its dependencies plus the live history.
///
/// Use cases are cheap to build; each accessor wires a fresh one against the
/// shared history.
pub struct App {
    deps: AppDeps,
    history: SharedHistory,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            history: new_shared_history(),
        }
    }

    pub fn history(&self) -> SharedHistory {
        self.history.clone()
    }

    pub fn capture_clipboard_text(&self) -> CaptureClipboardText {
        CaptureClipboardText::new(
            self.history.clone(),
            self.deps.change_origin.clone(),
            self.deps.history_view.clone(),
        )
    }

    pub fn copy_all(&self) -> CopyAllToSystemClipboard {
        CopyAllToSystemClipboard::new(
            self.history.clone(),
            self.deps.clipboard.clone(),
            self.deps.change_origin.clone(),
        )
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.history.clone(), self.deps.history_view.clone())
    }

    pub fn list_history_entries(&self) -> ListHistoryEntries {
        ListHistoryEntries::new(self.history.clone())
    }

    pub fn load_settings(&self) -> LoadSettings {
        LoadSettings::new(self.deps.settings.clone())
    }

    pub fn restore_history(&self) -> RestoreHistory {
        RestoreHistory::new(
            self.deps.settings.clone(),
            self.history.clone(),
            self.deps.history_view.clone(),
        )
    }

    pub fn persist_history(&self) -> PersistHistory {
        PersistHistory::new(self.deps.settings.clone(), self.history.clone())
    }

    pub fn start_clipboard_watcher(&self) -> StartClipboardWatcher {
        StartClipboardWatcher::new(self.deps.watcher_control.clone())
    }

    pub fn stop_clipboard_watcher(&self) -> StopClipboardWatcher {
        StopClipboardWatcher::new(self.deps.watcher_control.clone())
    }

    /// The capture use case as the platform runtime's change handler.
    pub fn clipboard_change_handler(&self) -> Arc<CaptureClipboardText> {
        Arc::new(self.capture_clipboard_text())
    }
}
