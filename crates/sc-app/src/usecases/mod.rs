//! Business logic use cases
//!
//! ```text
//! [Clipboard watcher]
//!         ↓
//! CaptureClipboardText ──→ HistoryStore ──→ HistoryViewPort
//!                               ↑
//! ListHistoryEntries / CopyAllToSystemClipboard / ClearHistory   (user)
//!                               ↕
//! RestoreHistory (start) / PersistHistory (shutdown) ──→ SettingsPort
//! ```

pub mod capture_clipboard_text;
pub mod clear_history;
pub mod copy_all_to_clipboard;
pub mod list_history_entries;
pub mod load_settings;
pub mod persist_history;
pub mod restore_history;
pub mod start_clipboard_watcher;
pub mod stop_clipboard_watcher;

pub use capture_clipboard_text::CaptureClipboardText;
pub use clear_history::ClearHistory;
pub use copy_all_to_clipboard::{CopyAllToSystemClipboard, COPY_ALL_ORIGIN_TTL};
pub use list_history_entries::ListHistoryEntries;
pub use load_settings::LoadSettings;
pub use persist_history::PersistHistory;
pub use restore_history::RestoreHistory;
pub use start_clipboard_watcher::{StartClipboardWatcher, StartClipboardWatcherError};
pub use stop_clipboard_watcher::{StopClipboardWatcher, StopClipboardWatcherError};
