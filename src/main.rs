use std::time::Duration;

use clap::Parser;

use supercopy::bootstrap::{resolve_app_paths, run_app, tracing::init_tracing_subscriber};
use supercopy::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let paths = resolve_app_paths(args.config.as_deref())?;

    if let Err(err) = init_tracing_subscriber(Some(&paths.logs_dir)) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_app(args, paths));

    // The stdin reader thread may still be parked in a read after Ctrl-C.
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}
