use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single piece of clipboard text as it is kept in history.
///
/// Always trimmed and never empty. Two entries are the same entry when
/// their trimmed text is byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClipboardEntry(String);

impl ClipboardEntry {
    /// Normalizes raw clipboard text into an entry.
    ///
    /// Returns `None` when nothing is left after trimming.
    ///
    /// ```
    /// use sc_core::ClipboardEntry;
    ///
    /// let entry = ClipboardEntry::parse("  hello \n").unwrap();
    /// assert_eq!(entry.as_str(), "hello");
    /// assert!(ClipboardEntry::parse(" \t ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for ClipboardEntry {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ClipboardEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClipboardEntry {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ClipboardEntry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ClipboardEntry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<ClipboardEntry> for String {
    fn from(entry: ClipboardEntry) -> Self {
        entry.0
    }
}

/// Error returned when text cannot become an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard entry must contain non-whitespace text")]
pub struct EmptyEntryError;

impl TryFrom<String> for ClipboardEntry {
    type Error = EmptyEntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ClipboardEntry::parse(&value).ok_or(EmptyEntryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_both_ends() {
        let entry = ClipboardEntry::parse("\t  spaced out \r\n").unwrap();
        assert_eq!(entry, "spaced out");
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        let entry = ClipboardEntry::parse(" line one\n line two ").unwrap();
        assert_eq!(entry.as_str(), "line one\n line two");
    }

    #[test]
    fn parse_rejects_blank_text() {
        assert!(ClipboardEntry::parse("").is_none());
        assert!(ClipboardEntry::parse("   \n\t").is_none());
    }

    #[test]
    fn deserialize_normalizes_and_rejects_blank() {
        let entry: ClipboardEntry = serde_json::from_str("\"  padded  \"").unwrap();
        assert_eq!(entry, "padded");

        let blank: Result<ClipboardEntry, _> = serde_json::from_str("\"   \"");
        assert!(blank.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let entry = ClipboardEntry::parse("x").unwrap();
        assert_eq!(serde_json::to_string(&entry).unwrap(), "\"x\"");
    }
}
