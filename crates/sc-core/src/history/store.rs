use std::collections::HashSet;

use super::ClipboardEntry;

/// Separator placed between entries by [`HistoryStore::joined`].
pub const ENTRY_SEPARATOR: &str = "\n";

/// Ordered, insertion-once history of clipboard text.
///
/// Entries keep the order in which they were first accepted and are never
/// reordered. A set index mirrors `entries` so membership is O(1).
///
/// ```
/// use sc_core::HistoryStore;
///
/// let mut store = HistoryStore::new();
/// assert!(store.add("foo"));
/// assert!(!store.add("foo"));
/// assert!(store.add("  bar "));
/// assert_eq!(store.joined(), "foo\nbar");
/// ```
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    entries: Vec<ClipboardEntry>,
    index: HashSet<ClipboardEntry>,
    last_accepted: Option<ClipboardEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers observed clipboard text to the history.
    ///
    /// Returns `true` only when a new entry was appended. A `false` return
    /// does not mean nothing changed: re-observing an entry that is already
    /// resident moves the last-accepted marker to it.
    pub fn add(&mut self, text: &str) -> bool {
        let Some(entry) = ClipboardEntry::parse(text) else {
            return false;
        };

        if self.last_accepted.as_ref() == Some(&entry) {
            return false;
        }

        if self.index.contains(&entry) {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = entry.len(), "entry already in history");
            self.last_accepted = Some(entry);
            return false;
        }

        self.index.insert(entry.clone());
        self.entries.push(entry.clone());
        self.last_accepted = Some(entry);

        #[cfg(feature = "tracing")]
        tracing::trace!(count = self.entries.len(), "history entry appended");

        true
    }

    /// Same as [`add`](Self::add) for clipboards that may report no text at all.
    pub fn observe(&mut self, text: Option<&str>) -> bool {
        match text {
            Some(text) => self.add(text),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.last_accepted = None;
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_accepted(&self) -> Option<&ClipboardEntry> {
        self.last_accepted.as_ref()
    }

    /// Trimmed membership check.
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text.trim())
    }

    /// All entries, in order, joined by [`ENTRY_SEPARATOR`].
    pub fn joined(&self) -> String {
        self.entries
            .iter()
            .map(ClipboardEntry::as_str)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }

    /// Owned copy of the entries, for persistence and rendering.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.as_str().to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = &'a ClipboardEntry;
    type IntoIter = std::slice::Iter<'a, ClipboardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
