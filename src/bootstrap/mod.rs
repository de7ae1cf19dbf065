pub mod run;
pub mod tracing;
pub mod wiring;

pub use run::{run_app, run_session};
pub use wiring::{resolve_app_paths, wire_dependencies, wire_with_clipboard, WiredApp};
