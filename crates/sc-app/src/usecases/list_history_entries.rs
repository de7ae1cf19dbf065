use crate::history::SharedHistory;

/// Snapshot of the history, in order, for rendering.
pub struct ListHistoryEntries {
    history: SharedHistory,
}

impl ListHistoryEntries {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    pub async fn execute(&self) -> Vec<String> {
        self.history.lock().await.snapshot()
    }
}
