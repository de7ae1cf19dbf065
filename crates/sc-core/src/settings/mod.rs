mod defaults;
pub mod model;

pub use model::{GeneralSettings, Settings, WatchMode, WatcherSettings, CURRENT_SCHEMA_VERSION};
