use crate::config::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT,
    URL_MAX_LENGTH,
};
use crate::structs::config::pattern_category::PatternCategory;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_max_length() -> usize {
        URL_MAX_LENGTH
    }

    pub fn default_suspicious_keywords() -> Vec<String> {
        to_strings(&[
            "login", "verify", "secure", "account", "banking",
            "update", "password", "confirm", "urgent", "immediate",
        ])
    }

    pub fn default_title_keywords() -> Vec<String> {
        to_strings(&["login", "verify", "secure"])
    }

    pub fn default_patterns() -> Vec<PatternCategory> {
        vec![
            PatternCategory::new("urgency", &["urgent", "immediate", "action required", "last warning"]),
            PatternCategory::new("financial", &["payment", "invoice", "bill", "transfer", "refund"]),
            PatternCategory::new("threat", &["suspended", "closed", "terminated", "locked"]),
            PatternCategory::new("request", &["click here", "verify now", "update immediately"]),
        ]
    }

    pub fn default_greetings() -> Vec<String> {
        to_strings(&["Customer", "User", "Valued Member", "Account Holder"])
    }

    pub fn default_fetch_enabled() -> bool {
        true
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_FETCH_TIMEOUT_SECS
    }

    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }
}

pub fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
