use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use sc_core::ports::HistoryViewPort;
use tracing::warn;

/// Line-oriented rendering of the history list.
///
/// Accepted entries are printed as numbered rows the moment they arrive.
/// Multi-line entries are shown on one row with `\n` escaped.
pub struct ConsoleView<W: Write + Send> {
    inner: Mutex<ConsoleState<W>>,
}

struct ConsoleState<W> {
    out: W,
    rows: usize,
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: Mutex::new(ConsoleState { out, rows: 0 }),
        }
    }

    /// Print a message that is not a history row.
    pub fn line(&self, message: &str) {
        self.write(|state| writeln!(state.out, "{message}"));
    }

    /// Print `entries` as a numbered listing.
    pub fn listing(&self, entries: &[String]) {
        self.write(|state| {
            if entries.is_empty() {
                return writeln!(state.out, "(history is empty)");
            }
            for (i, text) in entries.iter().enumerate() {
                writeln!(state.out, "{}", format_row(i + 1, text))?;
            }
            Ok(())
        });
    }

    fn write(&self, f: impl FnOnce(&mut ConsoleState<W>) -> std::io::Result<()>) {
        let mut state = self.lock();
        let result = f(&mut state).and_then(|()| state.out.flush());
        if let Err(err) = result {
            warn!(error = %err, "console write failed");
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState<W>> {
        // A panic mid-write leaves nothing worth protecting.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The writer, for inspection in tests.
    #[cfg(test)]
    pub(crate) fn with_output<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.lock().out)
    }
}

impl<W: Write + Send> HistoryViewPort for ConsoleView<W> {
    fn entry_appended(&self, text: &str) {
        self.write(|state| {
            state.rows += 1;
            writeln!(state.out, "{}", format_row(state.rows, text))
        });
    }

    fn cleared(&self) {
        self.lock().rows = 0;
    }
}

fn format_row(number: usize, text: &str) -> String {
    format!("{number:>4}  {}", text.replace('\n', "\\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: &ConsoleView<Vec<u8>>) -> String {
        view.with_output(|out| String::from_utf8(out.clone()).unwrap())
    }

    #[test]
    fn appended_entries_are_numbered() {
        let view = ConsoleView::new(Vec::new());
        view.entry_appended("foo");
        view.entry_appended("bar");

        assert_eq!(output(&view), "   1  foo\n   2  bar\n");
    }

    #[test]
    fn numbering_restarts_after_clear() {
        let view = ConsoleView::new(Vec::new());
        view.entry_appended("foo");
        view.cleared();
        view.entry_appended("bar");

        assert_eq!(output(&view), "   1  foo\n   1  bar\n");
    }

    #[test]
    fn multi_line_entries_stay_on_one_row() {
        let view = ConsoleView::new(Vec::new());
        view.entry_appended("a\nb");

        assert_eq!(output(&view), "   1  a\\nb\n");
    }

    #[test]
    fn empty_listing_says_so() {
        let view = ConsoleView::new(Vec::new());
        view.listing(&[]);

        assert_eq!(output(&view), "(history is empty)\n");
    }
}
