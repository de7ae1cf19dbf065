//! SuperCopy Application Orchestration Layer
//!
//! This crate contains the use cases that drive the clipboard history.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod history;
pub mod usecases;

pub use app::App;
pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use history::SharedHistory;
