use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("cannot access scan root {path}: {source}")]
    RootAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("glob error: {0}")]
    Pattern(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}
