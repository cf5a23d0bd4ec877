use thiserror::Error;

/// Errors emitted while loading or saving shell settings.
#[derive(Debug, Error)]
pub(crate) enum ShellStorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
