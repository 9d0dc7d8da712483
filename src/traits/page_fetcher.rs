use async_trait::async_trait;
use crate::enums::fetch_error::FetchError;

/// Retrieves the `<title>` of a live page. Implementations must bound their
/// own latency; the URL scorer awaits the call once and never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_title(&self, url: &str) -> Result<String, FetchError>;
}
