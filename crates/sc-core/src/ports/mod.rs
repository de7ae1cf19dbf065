//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The use cases in `sc-app` only see
//! these traits; `sc-infra` and `sc-platform` provide the implementations.

pub mod app_dirs;
mod clipboard;
mod clipboard_change_handler;
mod clipboard_change_origin;
pub mod errors;
mod history_view;
pub mod settings;
pub mod watcher_control;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clipboard_change_origin::ClipboardChangeOriginPort;
pub use errors::AppDirsError;
pub use history_view::HistoryViewPort;
pub use settings::SettingsPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
