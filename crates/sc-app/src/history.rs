use std::sync::Arc;

use sc_core::HistoryStore;
use tokio::sync::Mutex;

/// The one history store of a running application.
///
/// Every use case that reads or mutates history goes through this lock, so
/// capture events and user commands are applied one at a time.
pub type SharedHistory = Arc<Mutex<HistoryStore>>;

pub fn new_shared_history() -> SharedHistory {
    Arc::new(Mutex::new(HistoryStore::new()))
}
