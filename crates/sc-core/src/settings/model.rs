use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Re-feed the persisted history into the store at startup.
    ///
    /// Off by default: a session starts with an empty history.
    #[serde(default)]
    pub restore_history_on_start: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchMode {
    /// OS change notifications.
    Native,
    /// Read the clipboard on a fixed interval and compare.
    Polling,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherSettings {
    #[serde(default = "default_watch_mode")]
    pub mode: WatchMode,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Contents of `SuperCopy_config.json`.
///
/// Every field is defaulted so that older files holding only `history`
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    /// Entries in history order, as written at the end of the last session.
    #[serde(default)]
    pub history: Vec<String>,

    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub watcher: WatcherSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_watch_mode() -> WatchMode {
    WatchMode::Native
}

pub(crate) fn default_poll_interval_ms() -> u64 {
    500
}
