use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::FutureExt;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::constants::{
    URL_HTTP_PENALTY, URL_IP_PENALTY, URL_KEYWORD_PENALTY, URL_LENGTH_PENALTY,
    URL_NO_SCHEME_PENALTY, URL_TITLE_PENALTY, URL_USERINFO_PENALTY,
};
use crate::enums::verdict::Verdict;
use crate::errors::{PhishGuardError, PhishGuardResult};
use crate::helpers::fingerprint::capture_timestamp;
use crate::services::page_fetcher::HttpPageFetcher;
use crate::structs::check_outcome::{weighted, CheckOutcome};
use crate::structs::config::config::Config;
use crate::structs::config::url_rules_config::UrlRulesConfig;
use crate::structs::score_card::{isolated, ScoreCard};
use crate::structs::url_analysis::UrlAnalysis;
use crate::traits::page_fetcher::PageFetcher;

// Dotted quad anywhere in the string; octet ranges are not validated.
static IP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("ip pattern is valid")
});

pub const FETCH_FAILED_FINDING: &str = "Could not fetch page content";

/// Scores a URL with structural and lexical heuristics, optionally followed
/// by a look at the live page title.
#[derive(Clone)]
pub struct UrlAnalyzer {
    rules: UrlRulesConfig,
    fetcher: Option<Arc<dyn PageFetcher>>,
}

impl UrlAnalyzer {
    /// An analyzer that never touches the network.
    pub fn new(rules: UrlRulesConfig) -> Self {
        let rules = UrlRulesConfig {
            suspicious_keywords: lowercase_all(&rules.suspicious_keywords),
            title_keywords: lowercase_all(&rules.title_keywords),
            ..rules
        };

        Self { rules, fetcher: None }
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn from_config(config: &Config) -> PhishGuardResult<Self> {
        if config.url.suspicious_keywords.iter().any(String::is_empty) {
            return Err(PhishGuardError::config_error(
                "suspicious keywords must not be empty strings",
                Some("url.suspicious_keywords"),
                None,
            ));
        }

        let analyzer = Self::new(config.url.clone());
        if !config.fetch.enabled {
            log::debug!("Page fetching disabled; URL analysis is offline");
            return Ok(analyzer);
        }

        let fetcher = HttpPageFetcher::new(&config.fetch)?;
        Ok(analyzer.with_fetcher(Arc::new(fetcher)))
    }

    pub const fn is_offline(&self) -> bool {
        self.fetcher.is_none()
    }

    pub async fn analyze(&self, url: &str) -> UrlAnalysis {
        log::info!("🔍 Analyzing: {url}");

        let mut card = ScoreCard::new();
        card.run("length", || check_length(url, self.rules.max_length));
        card.run("embedded_ip", || check_embedded_ip(url));
        card.run("userinfo", || check_userinfo(url));
        card.run("keywords", || check_keywords(url, &self.rules.suspicious_keywords));

        let (scheme, target) = isolated("scheme", || check_scheme(url))
            .unwrap_or_else(|| (CheckOutcome::none(), url.to_string()));
        card.apply(scheme);

        let mut page_title = None;
        if let Some(fetcher) = &self.fetcher {
            let (outcome, title) = self.inspect_page(fetcher.as_ref(), &target).await;
            card.apply(outcome);
            page_title = title;
        }

        let (risk_score, findings) = card.into_parts();
        let verdict = Verdict::for_url_score(risk_score);
        log::debug!("URL {target} scored {risk_score} ({verdict})");

        UrlAnalysis {
            url: target,
            timestamp: capture_timestamp(),
            risk_score,
            verdict,
            findings,
            page_title,
        }
    }

    async fn inspect_page(&self, fetcher: &dyn PageFetcher, url: &str) -> (CheckOutcome, Option<String>) {
        match AssertUnwindSafe(fetcher.fetch_title(url)).catch_unwind().await {
            Ok(Ok(title)) => {
                let outcome = isolated("page_title", || check_title(&title, &self.rules.title_keywords))
                    .unwrap_or_default();
                (outcome, Some(title))
            }
            Ok(Err(e)) => {
                log::warn!("⚠️ Could not fetch {url}: {e}");
                (CheckOutcome::note(FETCH_FAILED_FINDING), None)
            }
            Err(_) => {
                log::error!("❌ Page fetcher panicked while fetching {url}");
                (CheckOutcome::note(FETCH_FAILED_FINDING), None)
            }
        }
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

pub fn check_length(url: &str, max_length: usize) -> CheckOutcome {
    if url.chars().count() > max_length {
        CheckOutcome::flag(URL_LENGTH_PENALTY, "URL is unusually long (potential obfuscation)")
    } else {
        CheckOutcome::none()
    }
}

pub fn check_embedded_ip(url: &str) -> CheckOutcome {
    if IP_PATTERN.is_match(url) {
        CheckOutcome::flag(URL_IP_PENALTY, "IP address found in URL (suspicious)")
    } else {
        CheckOutcome::none()
    }
}

/// Any `@` counts, wherever it appears in the URL.
pub fn check_userinfo(url: &str) -> CheckOutcome {
    if url.contains('@') {
        CheckOutcome::flag(URL_USERINFO_PENALTY, "@ symbol found (possible credential embedding)")
    } else {
        CheckOutcome::none()
    }
}

/// `keywords` must already be lowercase.
pub fn check_keywords(url: &str, keywords: &[String]) -> CheckOutcome {
    let lowered = url.to_lowercase();
    let found: Vec<&str> = keywords
        .iter()
        .filter(|keyword| lowered.contains(keyword.as_str()))
        .map(String::as_str)
        .collect();

    if found.is_empty() {
        return CheckOutcome::none();
    }

    CheckOutcome::flag(
        weighted(found.len(), URL_KEYWORD_PENALTY),
        format!("Suspicious keywords found: {}", found.join(", ")),
    )
}

/// Returns the outcome together with the URL to use from here on.
pub fn check_scheme(url: &str) -> (CheckOutcome, String) {
    if url.starts_with("http://") {
        (
            CheckOutcome::flag(URL_HTTP_PENALTY, "Using HTTP instead of HTTPS (less secure)"),
            url.to_string(),
        )
    } else if url.starts_with("https://") {
        (CheckOutcome::none(), url.to_string())
    } else {
        (
            CheckOutcome::flag(URL_NO_SCHEME_PENALTY, "No protocol specified (adding https://)"),
            format!("https://{url}"),
        )
    }
}

/// `keywords` must already be lowercase.
pub fn check_title(title: &str, keywords: &[String]) -> CheckOutcome {
    let lowered = title.to_lowercase();
    if keywords.iter().any(|keyword| lowered.contains(keyword.as_str())) {
        CheckOutcome::flag(URL_TITLE_PENALTY, "Suspicious words in page title")
    } else {
        CheckOutcome::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::fetch_error::FetchError;
    use crate::traits::page_fetcher::MockPageFetcher;

    fn offline() -> UrlAnalyzer {
        UrlAnalyzer::new(UrlRulesConfig::default())
    }

    fn with_title(title: &'static str) -> UrlAnalyzer {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_title()
            .times(1)
            .returning(move |_| Ok(title.to_string()));
        offline().with_fetcher(Arc::new(fetcher))
    }

    #[test]
    fn length_penalty_is_strictly_greater_than_limit() {
        let at_limit = format!("https://{}", "a".repeat(75 - 8));
        let over_limit = format!("{at_limit}b");
        assert_eq!(at_limit.len(), 75);
        assert!(check_length(&at_limit, 75).is_empty());
        assert_eq!(check_length(&over_limit, 75).score, 10);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let url = "é".repeat(75);
        assert!(check_length(&url, 75).is_empty());
    }

    #[test]
    fn ip_match_needs_no_boundaries() {
        assert_eq!(check_embedded_ip("https://x.com/v1234.5.6.7890").score, 20);
        assert!(check_embedded_ip("https://x.com/1.2.3").is_empty());
    }

    #[test]
    fn at_sign_anywhere_is_flagged() {
        assert_eq!(check_userinfo("https://x.com/path/@user").score, 15);
    }

    #[test]
    fn keywords_are_scored_per_match_in_list_order() {
        let keywords = UrlAnalyzer::new(UrlRulesConfig::default()).rules.suspicious_keywords;
        let outcome = check_keywords("https://SECURE-login.example/Account", &keywords);
        assert_eq!(outcome.score, 15);
        assert_eq!(outcome.findings, vec!["Suspicious keywords found: login, secure, account".to_string()]);
    }

    #[test]
    fn configured_keywords_are_matched_case_insensitively() {
        let rules = UrlRulesConfig {
            suspicious_keywords: vec!["WALLET".to_string()],
            ..UrlRulesConfig::default()
        };
        let analyzer = UrlAnalyzer::new(rules);
        assert_eq!(check_keywords("https://my-wallet.io", &analyzer.rules.suspicious_keywords).score, 5);
    }

    #[test]
    fn scheme_outcomes_are_exclusive() {
        let (http, url) = check_scheme("http://a.com");
        assert_eq!((http.score, url.as_str()), (5, "http://a.com"));

        let (https, url) = check_scheme("https://a.com");
        assert!(https.is_empty());
        assert_eq!(url, "https://a.com");

        let (bare, url) = check_scheme("a.com");
        assert_eq!(bare.score, 3);
        assert_eq!(url, "https://a.com");
    }

    #[tokio::test]
    async fn bare_host_is_normalized_in_result() {
        let result = offline().analyze("example.com").await;
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.risk_score, 3);
        assert_eq!(result.findings, vec!["No protocol specified (adding https://)".to_string()]);
    }

    #[tokio::test]
    async fn fetch_uses_normalized_url() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_title()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok("Example Domain".to_string()));

        let result = offline().with_fetcher(Arc::new(fetcher)).analyze("example.com").await;
        assert_eq!(result.page_title.as_deref(), Some("Example Domain"));
        assert_eq!(result.risk_score, 3);
    }

    #[tokio::test]
    async fn suspicious_title_adds_penalty() {
        let result = with_title("Please Verify your details").analyze("https://github.com").await;
        assert_eq!(result.risk_score, 10);
        assert_eq!(result.findings, vec!["Suspicious words in page title".to_string()]);
        assert_eq!(result.page_title.as_deref(), Some("Please Verify your details"));
        assert_eq!(result.verdict, Verdict::Clean);
    }

    #[tokio::test]
    async fn benign_title_is_recorded_without_penalty() {
        let result = with_title("GitHub").analyze("https://github.com").await;
        assert_eq!(result.risk_score, 0);
        assert!(result.findings.is_empty());
        assert_eq!(result.page_title.as_deref(), Some("GitHub"));
    }

    #[tokio::test]
    async fn fetch_failure_becomes_soft_finding() {
        for failure in [FetchError::Timeout, FetchError::Status(404), FetchError::MissingTitle] {
            let mut fetcher = MockPageFetcher::new();
            fetcher
                .expect_fetch_title()
                .returning(move |_| Err(failure.clone()));

            let result = offline()
                .with_fetcher(Arc::new(fetcher))
                .analyze("http://192.168.1.1/login.php")
                .await;

            assert_eq!(result.risk_score, 30);
            assert_eq!(result.verdict, Verdict::HighRisk);
            assert_eq!(result.findings.last().map(String::as_str), Some(FETCH_FAILED_FINDING));
            assert_eq!(result.page_title, None);
        }
    }

    #[tokio::test]
    async fn offline_analysis_records_no_fetch_note() {
        let analyzer = offline();
        assert!(analyzer.is_offline());
        let result = analyzer.analyze("https://github.com").await;
        assert!(result.findings.is_empty());
        assert_eq!(result.verdict, Verdict::Clean);
    }

    #[tokio::test]
    async fn empty_input_is_scored_without_failing() {
        let result = offline().analyze("").await;
        assert_eq!(result.url, "https://");
        assert_eq!(result.risk_score, 3);
        assert_eq!(result.verdict, Verdict::Clean);
    }

    #[test]
    fn from_config_rejects_empty_keyword() {
        let mut config = Config::default();
        config.url.suspicious_keywords.push(String::new());
        assert!(UrlAnalyzer::from_config(&config).is_err());
    }

    #[test]
    fn from_config_respects_disabled_fetch() {
        let mut config = Config::default();
        config.fetch.enabled = false;
        assert!(UrlAnalyzer::from_config(&config).unwrap().is_offline());
    }
}
