/// Requests sent into the platform runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCommand {
    StartClipboardWatcher,
    StopClipboardWatcher,
    Shutdown,
}
