//! # sc-infra
//!
//! File and in-memory implementations of the `sc-core` ports.

pub mod clipboard;
pub mod settings;

pub use clipboard::InMemoryClipboardChangeOrigin;
pub use settings::FileSettingsRepository;
