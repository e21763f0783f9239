use thiserror::Error;

/// Errors surfaced by the API client.
///
/// None of these are retried internally; every failure rejects the call
/// that produced it, and a failed request is never written to storage.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response status outside the accepted set (200, 206). The body is
    /// not parsed.
    #[error("API returned HTTP status {0}")]
    Status(u16),

    /// Response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Caller-contract violation, raised before any network call.
    #[error("invalid usage: {0}")]
    Usage(String),

    /// An authenticated call was made before an API key was stored.
    #[error("no API key has been set")]
    MissingApiKey,

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}

pub(crate) fn storage_err(err: Box<dyn std::error::Error + Send + Sync>) -> ApiError {
    ApiError::Storage(err.to_string())
}
