//! Upstream fetch errors.

use thiserror::Error;

/// Errors that can occur while talking to a remote resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Target is not an absolute http(s) URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, TLS, timeout or body decoding failure.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a status we do not accept.
    #[error("Request to {url} failed with status code {status}")]
    Status { url: String, status: u16 },

    /// Redirect status without a usable Location header.
    #[error("Redirect from {url} (status {status}) has no valid Location header")]
    MissingLocation { url: String, status: u16 },

    /// Upstream returned an empty body where a document was required.
    #[error("Failed to fetch URL: empty response from {0}")]
    EmptyBody(String),

    /// Any other fetch failure, reported under one uniform prefix.
    #[error("Failed to fetch URL: {0}")]
    Unavailable(Box<FetchError>),
}

impl FetchError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Request(e) if e.is_timeout() => "timeout",
            FetchError::Request(e) if e.is_connect() => "connect",
            FetchError::Request(_) => "request",
            FetchError::Status { .. } => "status",
            FetchError::MissingLocation { .. } => "missing_location",
            FetchError::EmptyBody(_) => "empty_body",
            FetchError::Unavailable(inner) => inner.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            url: "https://example.com/".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Request to https://example.com/ failed with status code 404"
        );
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_unavailable_wraps_message_and_kind() {
        let err = FetchError::Unavailable(Box::new(FetchError::Status {
            url: "https://example.com/".into(),
            status: 503,
        }));
        assert_eq!(
            err.to_string(),
            "Failed to fetch URL: Request to https://example.com/ failed with status code 503"
        );
        assert_eq!(err.kind(), "status");
    }
}
