use std::sync::Arc;
use tracing::info;

use sc_core::ports::HistoryViewPort;

use crate::history::SharedHistory;

/// Empties the history and the shell's list. Never fails.
pub struct ClearHistory {
    history: SharedHistory,
    view: Arc<dyn HistoryViewPort>,
}

impl ClearHistory {
    pub fn new(history: SharedHistory, view: Arc<dyn HistoryViewPort>) -> Self {
        Self { history, view }
    }

    /// Returns how many entries were dropped.
    #[tracing::instrument(name = "usecase.clear_history.execute", skip(self))]
    pub async fn execute(&self) -> usize {
        let mut history = self.history.lock().await;
        let dropped = history.len();
        history.clear();
        self.view.cleared();

        info!(dropped, "history cleared");
        dropped
    }
}
