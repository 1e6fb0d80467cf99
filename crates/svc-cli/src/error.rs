//! Error types for svc-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Manifest(#[from] svc_manifest::Error),

    #[error(transparent)]
    Config(#[from] svc_config::Error),

    #[error(transparent)]
    Fs(#[from] svc_fs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
