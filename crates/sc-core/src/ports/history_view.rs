/// The shell's rendering of the history list.
///
/// Use cases push changes here after the store accepted them; the view
/// never mutates the store.
pub trait HistoryViewPort: Send + Sync {
    fn entry_appended(&self, text: &str);

    fn cleared(&self);
}
