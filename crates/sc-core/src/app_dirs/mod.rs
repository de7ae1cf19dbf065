use std::path::PathBuf;

/// Per-user application roots, already resolved for the current profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_config_root: PathBuf,
    pub app_data_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_dirs_is_pure_fact_container() {
        let dirs = AppDirs {
            app_config_root: PathBuf::from("/tmp/config/SuperCopy"),
            app_data_root: PathBuf::from("/tmp/data/SuperCopy"),
        };
        assert!(dirs.app_config_root.ends_with("SuperCopy"));
        assert!(dirs.app_data_root.ends_with("SuperCopy"));
    }
}
