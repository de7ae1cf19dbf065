//! Headless terminal shell.
//!
//! Reads one command per line and dispatches it to the application.
//! History rows are printed by [`ConsoleView`] as the store accepts them.

mod command;
mod view;

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use sc_app::App;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

pub use command::{ShellCommand, UnknownCommand, HELP};
pub use view::ConsoleView;

/// Why the shell loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Quit,
    EndOfInput,
    Interrupted,
}

pub struct Shell<W: Write + Send> {
    app: Arc<App>,
    console: Arc<ConsoleView<W>>,
}

impl<W: Write + Send> Shell<W> {
    pub fn new(app: Arc<App>, console: Arc<ConsoleView<W>>) -> Self {
        Self { app, console }
    }

    /// Run until `quit`, end of input, or `interrupt` resolves.
    pub async fn run_until<R, F>(&self, input: R, interrupt: F) -> ShellExit
    where
        R: AsyncBufRead + Unpin,
        F: Future<Output = ()>,
    {
        let mut lines = input.lines();
        tokio::pin!(interrupt);

        loop {
            let line = tokio::select! {
                line = lines.next_line() => line,
                () = &mut interrupt => {
                    info!("interrupted");
                    return ShellExit::Interrupted;
                }
            };

            let line = match line {
                Ok(Some(line)) => line,
                Ok(None) => return ShellExit::EndOfInput,
                Err(err) => {
                    warn!(error = %err, "failed to read shell input");
                    return ShellExit::EndOfInput;
                }
            };

            match ShellCommand::parse_line(&line) {
                Ok(Some(ShellCommand::Quit)) => return ShellExit::Quit,
                Ok(Some(command)) => self.dispatch(command).await,
                Ok(None) => {}
                Err(err) => self.console.line(&err.to_string()),
            }
        }
    }

    pub async fn dispatch(&self, command: ShellCommand) {
        debug!(?command, "shell command");
        match command {
            ShellCommand::List => {
                let entries = self.app.list_history_entries().execute().await;
                self.console.listing(&entries);
            }
            ShellCommand::CopyAll => match self.app.copy_all().execute().await {
                Ok(0) => self.console.line("nothing to copy"),
                Ok(n) => self.console.line(&format!("copied {}", entries(n))),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "copy all failed");
                    self.console.line(&format!("copy failed: {err}"));
                }
            },
            ShellCommand::Clear => {
                let removed = self.app.clear_history().execute().await;
                self.console.line(&format!("cleared {}", entries(removed)));
            }
            ShellCommand::Help => self.console.line(HELP),
            ShellCommand::Quit => {}
        }
    }
}

fn entries(n: usize) -> String {
    if n == 1 {
        "1 entry".to_string()
    } else {
        format!("{n} entries")
    }
}
