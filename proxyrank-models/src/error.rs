//! Error types for model access.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during model operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Alias not found in the catalogue.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The same alias was registered twice.
    #[error("duplicate model alias: {0}")]
    DuplicateAlias(String),

    /// Credentials not found for provider.
    #[error("credentials not found for provider: {0}")]
    CredentialsNotFound(String),

    /// Failed to access system keyring.
    #[error("keyring error: {0}")]
    Keyring(String),

    /// Provider API error.
    #[error("provider API error: {0}")]
    ProviderApi(String),

    /// Request failed.
    #[error("request failed: {0}")]
    Request(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
