use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,

    #[error("system local data directory is unavailable")]
    DataLocalDirUnavailable,
}
