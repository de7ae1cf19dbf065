use std::sync::Arc;
use tracing::warn;

use sc_core::ports::SettingsPort;
use sc_core::Settings;

/// Loads settings, falling back to defaults.
///
/// An unreadable or corrupt settings file is logged and treated as if it
/// did not exist.
pub struct LoadSettings {
    settings: Arc<dyn SettingsPort>,
}

impl LoadSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Settings {
        match self.settings.load().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }
}
