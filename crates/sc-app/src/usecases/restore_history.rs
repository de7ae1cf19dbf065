use std::sync::Arc;
use tracing::info;

use sc_core::ports::{HistoryViewPort, SettingsPort};

use crate::history::SharedHistory;
use crate::usecases::LoadSettings;

/// Feeds the persisted history back into the store at startup.
///
/// Runs only when `general.restore_history_on_start` is set, or when the
/// caller forces it. Every persisted value goes through the normal `add`
/// rules, so a hand-edited file cannot introduce blanks or duplicates.
pub struct RestoreHistory {
    settings: Arc<dyn SettingsPort>,
    history: SharedHistory,
    view: Arc<dyn HistoryViewPort>,
    force: bool,
}

impl RestoreHistory {
    pub fn new(
        settings: Arc<dyn SettingsPort>,
        history: SharedHistory,
        view: Arc<dyn HistoryViewPort>,
    ) -> Self {
        Self {
            settings,
            history,
            view,
            force: false,
        }
    }

    /// Restore regardless of the settings flag.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Returns the number of entries restored.
    #[tracing::instrument(name = "usecase.restore_history.execute", skip(self), fields(force = self.force))]
    pub async fn execute(&self) -> usize {
        let settings = LoadSettings::new(self.settings.clone()).execute().await;

        if !(self.force || settings.general.restore_history_on_start) {
            info!("starting with empty history");
            return 0;
        }

        let mut history = self.history.lock().await;
        let mut restored = 0;
        for text in &settings.history {
            if history.add(text) {
                if let Some(entry) = history.last_accepted() {
                    self.view.entry_appended(entry.as_str());
                }
                restored += 1;
            }
        }

        info!(restored, persisted = settings.history.len(), "history restored");
        restored
    }
}
