use std::path::PathBuf;

use sc_core::app_dirs::AppDirs;

pub const SETTINGS_FILE_NAME: &str = "SuperCopy_config.json";
pub const LOG_FILE_NAME: &str = "supercopy.log";

/// Concrete file locations derived from the application roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub settings_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            settings_path: dirs.app_config_root.join(SETTINGS_FILE_NAME),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }

    /// Replace the settings location, e.g. from `--config`.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }
}
