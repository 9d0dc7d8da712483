use serde::{Deserialize, Serialize};
use crate::structs::config::email_rules_config::EmailRulesConfig;
use crate::structs::config::fetch_config::FetchConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::url_rules_config::UrlRulesConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub url: UrlRulesConfig,

    #[serde(default)]
    pub email: EmailRulesConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub server: ServerConfig,
}
