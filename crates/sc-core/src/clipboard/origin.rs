use serde::{Deserialize, Serialize};

/// Who caused a clipboard change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardChangeOrigin {
    /// The user (or another application) copied something.
    LocalCapture,
    /// SuperCopy itself wrote the joined history back to the clipboard.
    CopyAll,
}

impl ClipboardChangeOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardChangeOrigin::LocalCapture => "local_capture",
            ClipboardChangeOrigin::CopyAll => "copy_all",
        }
    }

    /// Whether a change with this origin should be offered to the history.
    pub fn is_capturable(&self) -> bool {
        matches!(self, ClipboardChangeOrigin::LocalCapture)
    }
}
