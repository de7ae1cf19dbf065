use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sc_app::{App, AppPaths};
use sc_platform::runtime::PlatformCommandSender;
use sc_platform::PlatformCommand;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::wiring::{wire_dependencies, WiredApp};
use crate::cli::Args;
use crate::shell::{ConsoleView, Shell, ShellExit};

const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

const BANNER: &str = "SuperCopy is watching the clipboard. Type `help` for commands.";

/// Run SuperCopy against the real clipboard, stdin and stdout.
pub async fn run_app(args: Args, paths: AppPaths) -> anyhow::Result<()> {
    info!(settings = %paths.settings_path.display(), "starting SuperCopy");

    let console = Arc::new(ConsoleView::new(std::io::stdout()));
    let wired = wire_dependencies(&paths, console.clone())?;

    let exit = run_session(
        &args,
        wired,
        console,
        BufReader::new(tokio::io::stdin()),
        ctrl_c(),
    )
    .await?;

    info!(?exit, "SuperCopy stopped");
    Ok(())
}

/// One session: start the runtime and watcher, run the shell, then shut
/// everything down and persist the history.
pub async fn run_session<W, R, F>(
    args: &Args,
    wired: WiredApp,
    console: Arc<ConsoleView<W>>,
    input: R,
    interrupt: F,
) -> anyhow::Result<ShellExit>
where
    W: Write + Send + 'static,
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    let mut settings = wired.app.load_settings().execute().await;
    args.apply_to(&mut settings);

    let (app, command_tx, runtime) = wired.into_runtime(&settings.watcher);
    let runtime_task = tokio::spawn(runtime.start());

    app.restore_history()
        .force(settings.general.restore_history_on_start)
        .execute()
        .await;

    if let Err(err) = app.start_clipboard_watcher().execute().await {
        error!(error = %err, "clipboard watcher did not start");
        shutdown(&app, &command_tx, runtime_task).await;
        return Err(err).context("failed to start clipboard watcher");
    }

    console.line(BANNER);
    let shell = Shell::new(app.clone(), console);
    let exit = shell.run_until(input, interrupt).await;

    shutdown(&app, &command_tx, runtime_task).await;
    Ok(exit)
}

async fn shutdown(app: &App, command_tx: &PlatformCommandSender, runtime_task: JoinHandle<()>) {
    if let Err(err) = app.stop_clipboard_watcher().execute().await {
        warn!(error = %err, "failed to stop clipboard watcher");
    }

    if command_tx.send(PlatformCommand::Shutdown).await.is_err() {
        debug!("platform runtime already stopped");
    }
    match tokio::time::timeout(RUNTIME_SHUTDOWN_TIMEOUT, runtime_task).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(error = %err, "platform runtime task failed"),
        Err(_) => warn!("platform runtime did not stop in time"),
    }

    app.persist_history().execute_best_effort().await;
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}
