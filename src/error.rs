use http::{StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

/// Byte-Watt vendor code for a transient failure on their side.
pub const UPSTREAM_NETWORK_ERROR: i64 = 9007;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint responded with a non-successful HTTP status.
    #[error("`{path}` failed with HTTP {status}: {body}")]
    Http { path: &'static str, status: StatusCode, body: String },

    /// The response is HTTP-successful, but carries a known upstream error code.
    #[error("network error {code} from upstream")]
    Upstream { code: i64 },

    /// The response is valid JSON, but the expected fields are missing.
    #[error("unexpected data format: {0}")]
    UnexpectedFormat(&'static str),

    #[error("failed to deserialize the response")]
    Deserialize(#[from] serde_json::Error),

    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("the value cannot be sent in a header")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() { Self::Timeout(error) } else { Self::Transport(error) }
    }
}
