mod local;
mod native_watcher;
mod polling_watcher;

pub use local::LocalClipboard;
pub use native_watcher::NativeClipboardWatcher;
pub use polling_watcher::PollingClipboardWatcher;
