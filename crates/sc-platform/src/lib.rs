//! # sc-platform
//!
//! Platform-specific implementations for SuperCopy.
//!
//! This crate contains the pieces that touch the operating system: the
//! clipboard itself, the watchers that notice clipboard changes, the
//! runtime event loop that forwards those changes to the application
//! layer, and resolution of per-user application directories.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod ipc;
pub mod runtime;

pub use adapters::InMemoryWatcherControl;
pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::LocalClipboard;
pub use ipc::{PlatformCommand, PlatformEvent};
pub use runtime::{PlatformRuntime, WatcherMode};
