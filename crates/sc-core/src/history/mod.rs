//! Clipboard history domain.
//!
//! ```text
//! OS clipboard text
//!      ↓ trim, reject empty
//! ClipboardEntry
//!      ↓ last-accepted / membership check
//! HistoryStore (ordered, insertion-once)
//! ```

mod entry;
mod store;

pub use entry::ClipboardEntry;
pub use store::{HistoryStore, ENTRY_SEPARATOR};
