use std::path::PathBuf;

use clap::Parser;
use sc_core::settings::{Settings, WatchMode};

/// Command line options. Anything given here wins over the settings file
/// for this run only; it is never written back.
#[derive(Debug, Parser)]
#[command(
    name = "supercopy",
    version,
    about = "Collect distinct copied text and copy it all back at once"
)]
pub struct Args {
    /// Settings file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Restore the history saved at the end of the previous session
    #[arg(long)]
    pub restore: bool,

    /// Poll the clipboard instead of waiting for OS change notifications
    #[arg(long)]
    pub polling: bool,

    /// Polling interval in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(10..))]
    pub poll_interval_ms: Option<u64>,
}

impl Args {
    pub fn apply_to(&self, settings: &mut Settings) {
        if self.restore {
            settings.general.restore_history_on_start = true;
        }
        if self.polling {
            settings.watcher.mode = WatchMode::Polling;
        }
        if let Some(ms) = self.poll_interval_ms {
            settings.watcher.poll_interval_ms = ms;
        }
    }
}
