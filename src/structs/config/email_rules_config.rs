use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::pattern_category::PatternCategory;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmailRulesConfig {
    /// Scanned in declaration order; findings follow the same order.
    #[serde(default = "ConfigHelper::default_patterns")]
    pub patterns: Vec<PatternCategory>,

    #[serde(default = "ConfigHelper::default_greetings")]
    pub greetings: Vec<String>,
}

impl Default for EmailRulesConfig {
    fn default() -> Self {
        Self {
            patterns: ConfigHelper::default_patterns(),
            greetings: ConfigHelper::default_greetings(),
        }
    }
}
