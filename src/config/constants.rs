use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const SERVICE_NAME: &str = "PhishGuard Pro";

pub const CONFIG_DIR_NAME: &str = "phishguard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

// URL scorer weights
pub const URL_MAX_LENGTH: usize = 75;
pub const URL_LENGTH_PENALTY: u32 = 10;
pub const URL_IP_PENALTY: u32 = 20;
pub const URL_USERINFO_PENALTY: u32 = 15;
pub const URL_KEYWORD_PENALTY: u32 = 5;
pub const URL_HTTP_PENALTY: u32 = 5;
pub const URL_NO_SCHEME_PENALTY: u32 = 3;
pub const URL_TITLE_PENALTY: u32 = 10;

pub const URL_HIGH_RISK_THRESHOLD: u32 = 30;
pub const URL_SUSPICIOUS_THRESHOLD: u32 = 15;

// Email scorer weights
pub const EMAIL_PATTERN_PENALTY: u32 = 10;
pub const EMAIL_LINK_PENALTY: u32 = 5;
pub const EMAIL_REPLY_TO_PENALTY: u32 = 15;
pub const EMAIL_GREETING_PENALTY: u32 = 10;

pub const EMAIL_HIGH_RISK_THRESHOLD: u32 = 40;
pub const EMAIL_SUSPICIOUS_THRESHOLD: u32 = 20;

pub const EMAIL_HASH_LENGTH: usize = 16;
pub const REPORT_LINK_PREVIEW: usize = 5;

pub const SAMPLE_URLS: &[&str] = &[
    "https://github.com",
    "http://test.com@malicious.com",
    "http://192.168.1.1/login.php",
    "https://paypal-verify-account.com",
];

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
