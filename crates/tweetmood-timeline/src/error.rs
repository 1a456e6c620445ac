use thiserror::Error;

/// Errors returned by [`crate::TimelineClient`].
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The screen name is malformed, unknown, or its timeline is protected.
    #[error("no such user: {screen_name}")]
    UserNotFound { screen_name: String },

    #[error("rate limited fetching timeline for {screen_name}")]
    RateLimited { screen_name: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
