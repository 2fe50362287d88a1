use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubClientError {
    /// Network, timeout, or wire-level decode failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with an OAuth error body. The raw JSON is kept so
    /// callers can forward it unmodified.
    #[error("github rejected the request: {0}")]
    Provider(serde_json::Value),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
