use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use crate::enums::fetch_error::FetchError;
use crate::errors::PhishGuardResult;
use crate::structs::config::fetch_config::FetchConfig;
use crate::traits::page_fetcher::PageFetcher;

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<title>(.*?)</title>").expect("title pattern is valid")
});

/// Fetches pages over HTTP with a browser user agent and a hard timeout.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(config: &FetchConfig) -> PhishGuardResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_title(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        extract_title(&body).ok_or(FetchError::MissingTitle)
    }
}

/// Text between the first `<title>` and `</title>` on one line, matched
/// case-insensitively and kept verbatim.
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
