use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::timeout_duration;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "ConfigHelper::default_fetch_enabled")]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        timeout_duration(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_fetch_enabled(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            user_agent: ConfigHelper::default_user_agent(),
        }
    }
}
