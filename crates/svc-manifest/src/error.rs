/// Errors raised while loading a manifest or resolving a provider URL.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path does not lead to a readable app manifest with a `startup_app`.
    #[error("{path} is not an app manifest")]
    InvalidManifest { path: String },

    /// The requested provider version is not a channel, URL or release number.
    #[error("Not a valid version number or channel: {token}")]
    InvalidVersionToken { token: String },

    /// The rewritten manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
