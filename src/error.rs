//! Error types for the Spotify client.

use thiserror::Error;

/// Errors that can occur when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The network layer failed: connection error or request timeout
    #[error("error connecting to Spotify: {0}")]
    Connection(String),

    /// The requested resource does not exist
    #[error("resource not found: {path}")]
    NotFound {
        /// Request path that produced the miss
        path: String,
    },

    /// Spotify is throttling the client
    #[error("rate limited by Spotify")]
    RateLimited,

    /// Credentials were rejected
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Successful status but the body is not JSON (e.g. an HTML error page)
    #[error("unexpected response from Spotify ({content_type}): {body}")]
    Malformed {
        /// Content type reported by the server
        content_type: String,
        /// Raw response text, for diagnostics
        body: String,
    },

    /// The response body does not match the expected shape
    #[error("failed to decode {type_name}: {source} (body: {snippet})")]
    Decode {
        /// Name of the type that was being decoded
        type_name: &'static str,
        /// Underlying parser error
        source: serde_json::Error,
        /// Truncated raw fragment that failed to decode
        snippet: String,
    },

    /// Spotify returned an error status not covered by a more specific kind
    #[error("Spotify returned an error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw error body
        message: String,
    },

    /// A request violated a documented limit before any network call was made
    #[error("invalid request: {0}")]
    Validation(String),
}

/// Result type for Spotify client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
