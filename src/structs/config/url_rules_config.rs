use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UrlRulesConfig {
    #[serde(default = "ConfigHelper::default_max_length")]
    pub max_length: usize,

    #[serde(default = "ConfigHelper::default_suspicious_keywords")]
    pub suspicious_keywords: Vec<String>,

    #[serde(default = "ConfigHelper::default_title_keywords")]
    pub title_keywords: Vec<String>,
}

impl Default for UrlRulesConfig {
    fn default() -> Self {
        Self {
            max_length: ConfigHelper::default_max_length(),
            suspicious_keywords: ConfigHelper::default_suspicious_keywords(),
            title_keywords: ConfigHelper::default_title_keywords(),
        }
    }
}
