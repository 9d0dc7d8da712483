pub mod config;
pub mod pattern_category;
pub mod url_rules_config;
pub mod email_rules_config;
pub mod fetch_config;
pub mod server_config;
