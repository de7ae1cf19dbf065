// Events describe facts that already happened on the platform side.
// They never carry instructions about what to do next.

/// Facts emitted by watchers and the runtime itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The clipboard changed; `text` is `None` when it no longer holds text.
    ClipboardChanged { text: Option<String> },

    /// The runtime event loop is up.
    Started,

    /// The runtime event loop has exited.
    Stopped,

    /// A one-off failure, reported and otherwise ignored.
    Error { message: String },
}
