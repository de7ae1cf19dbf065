use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use sc_core::ports::SettingsPort;

use crate::history::SharedHistory;
use crate::usecases::LoadSettings;

/// Writes the current history into the settings file.
///
/// The rest of the settings document is carried over from what is on disk
/// (or defaults, if that cannot be read); only `history` is replaced.
pub struct PersistHistory {
    settings: Arc<dyn SettingsPort>,
    history: SharedHistory,
}

impl PersistHistory {
    pub fn new(settings: Arc<dyn SettingsPort>, history: SharedHistory) -> Self {
        Self { settings, history }
    }

    #[tracing::instrument(name = "usecase.persist_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<usize> {
        let mut settings = LoadSettings::new(self.settings.clone()).execute().await;
        settings.history = self.history.lock().await.snapshot();
        let count = settings.history.len();

        self.settings
            .save(&settings)
            .await
            .context("save history to settings failed")?;

        info!(entries = count, "history persisted");
        Ok(count)
    }

    /// Fire-and-forget variant for shutdown: failures are logged, never returned.
    pub async fn execute_best_effort(&self) {
        if let Err(err) = self.execute().await {
            warn!(error = %format!("{err:#}"), "history was not persisted");
        }
    }
}
