//! # sc-core
//!
//! Core domain models and business logic for SuperCopy.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod history;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::ClipboardChangeOrigin;
pub use history::{ClipboardEntry, HistoryStore, ENTRY_SEPARATOR};
pub use settings::model::Settings;
