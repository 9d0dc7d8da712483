use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use phishguard::enums::fetch_error::FetchError;
use phishguard::services::email_analyzer::EmailAnalyzer;
use phishguard::services::url_analyzer::UrlAnalyzer;
use phishguard::structs::config::email_rules_config::EmailRulesConfig;
use phishguard::structs::config::url_rules_config::UrlRulesConfig;
use phishguard::traits::page_fetcher::PageFetcher;
use phishguard::ui::analysis_server::AnalyzerState;

/// Returns a canned response and counts how often it was asked.
pub struct StubFetcher {
    response: Result<String, FetchError>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn title(title: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(title.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: FetchError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_title(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

pub fn offline_url_analyzer() -> UrlAnalyzer {
    UrlAnalyzer::new(UrlRulesConfig::default())
}

pub fn email_analyzer() -> EmailAnalyzer {
    EmailAnalyzer::new(&EmailRulesConfig::default()).expect("default email rules compile")
}

pub fn offline_state() -> AnalyzerState {
    AnalyzerState {
        url_analyzer: offline_url_analyzer(),
        email_analyzer: email_analyzer(),
    }
}
