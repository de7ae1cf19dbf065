//! # Application Dependencies
//!
//! Plain parameter grouping for [`App`](crate::App) construction.
//! Not a builder: no defaults, no optional fields, no hidden logic.

use std::sync::Arc;
use sc_core::ports::*;

pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub change_origin: Arc<dyn ClipboardChangeOriginPort>,
    pub watcher_control: Arc<dyn WatcherControlPort>,

    // Settings
    pub settings: Arc<dyn SettingsPort>,

    // UI
    pub history_view: Arc<dyn HistoryViewPort>,
}
