use super::model::*;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            restore_history_on_start: false,
        }
    }
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            mode: WatchMode::Native,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            history: Vec::new(),
            general: GeneralSettings::default(),
            watcher: WatcherSettings::default(),
        }
    }
}
