use thiserror::Error;

/// Errors from the instrument listing stage.
///
/// Listing failure is fatal to a run: there is no partial symbol list, so
/// the coordinator aborts before any fetch task is admitted.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during the API request (e.g., network failure, timeout,
    /// or a malformed response body).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Errors from a single per-symbol kline fetch.
///
/// Rate-limit responses surface here as an [`FetchError::Api`] with the
/// corresponding status; the pipeline does not retry them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// An error during the API request (e.g., network failure, timeout,
    /// or a malformed response body).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Errors while constructing a provider client.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// The configured API key cannot be used as an HTTP header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
