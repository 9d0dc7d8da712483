use thiserror::Error;

/// Why a page title could not be obtained. Never surfaced to callers of the
/// scorer; it only decides which soft finding gets recorded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("page has no <title> element")]
    MissingTitle,
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(error.to_string())
        }
    }
}
