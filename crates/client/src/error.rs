//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, decode).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("api error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The configured base URL does not parse.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}
