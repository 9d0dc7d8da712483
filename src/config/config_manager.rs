use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{PhishGuardError, PhishGuardResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# PhishGuard configuration

[url]
# URLs longer than this many characters are penalised
max_length = 75

# Case-insensitive substrings; each one present adds to the score
suspicious_keywords = [
    "login", "verify", "secure", "account", "banking",
    "update", "password", "confirm", "urgent", "immediate",
]

# Words that make a fetched page title suspicious
title_keywords = ["login", "verify", "secure"]

[email]
# Generic salutations following "Dear "
greetings = ["Customer", "User", "Valued Member", "Account Holder"]

# Phrase categories, scanned in this order with word boundaries
[[email.patterns]]
name = "urgency"
terms = ["urgent", "immediate", "action required", "last warning"]

[[email.patterns]]
name = "financial"
terms = ["payment", "invoice", "bill", "transfer", "refund"]

[[email.patterns]]
name = "threat"
terms = ["suspended", "closed", "terminated", "locked"]

[[email.patterns]]
name = "request"
terms = ["click here", "verify now", "update immediately"]

[fetch]
# Set to false to score URLs without contacting them
enabled = true
timeout_secs = 5

[server]
host = "127.0.0.1"
port = 5000
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the user config, falling back to built-in defaults when absent.
    pub fn load() -> PhishGuardResult<Config> {
        let path = Self::config_path();
        if path.exists() {
            return Self::load_from(&path);
        }

        log::debug!("No config at {}; using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> PhishGuardResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| PhishGuardError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| PhishGuardError::config_file_error(&path.display().to_string(), e.message()))?;

        if let Err(errors) = Self::validate_config(&config) {
            return Err(PhishGuardError::config_error(
                &errors.join("; "),
                None,
                Some("Run 'phishguard init' to see a valid sample configuration"),
            ));
        }

        Ok(config)
    }

    pub fn create_sample_config() -> PhishGuardResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> PhishGuardResult<()> {
        if path.exists() {
            return Err(PhishGuardError::file_error(
                &path.display().to_string(),
                "create config",
                "file already exists",
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| PhishGuardError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| PhishGuardError::file_error(&path.display().to_string(), "write", &e.to_string()))?;

        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.url.suspicious_keywords.iter().any(|k| k.trim().is_empty()) {
            errors.push("url.suspicious_keywords contains an empty keyword".to_string());
        }
        if config.url.title_keywords.iter().any(|k| k.trim().is_empty()) {
            errors.push("url.title_keywords contains an empty keyword".to_string());
        }

        let mut names = HashSet::new();
        for category in &config.email.patterns {
            if category.name.trim().is_empty() {
                errors.push("email.patterns contains a category without a name".to_string());
            } else if !names.insert(category.name.as_str()) {
                errors.push(format!("Duplicate pattern category: {}", category.name));
            }
            if category.terms.is_empty() {
                errors.push(format!("Pattern category '{}' has no terms", category.name));
            }
        }

        if config.email.greetings.iter().any(|g| g.trim().is_empty()) {
            errors.push("email.greetings contains an empty greeting".to_string());
        }

        if config.fetch.timeout_secs == 0 {
            errors.push("fetch.timeout_secs must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::pattern_category::PatternCategory;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(config.url.suspicious_keywords, defaults.url.suspicious_keywords);
        assert_eq!(config.email.patterns, defaults.email.patterns);
        assert_eq!(config.email.greetings, defaults.email.greetings);
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.server.port, 5000);
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: Config = toml::from_str("[fetch]\nenabled = false\n").unwrap();
        assert!(!config.fetch.enabled);
        assert_eq!(config.url.max_length, 75);
        assert_eq!(config.email.patterns.len(), 4);
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::write_sample_config(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.url.title_keywords, vec!["login", "verify", "secure"]);

        let again = ConfigManager::write_sample_config(&path);
        assert!(matches!(again, Err(PhishGuardError::FileOperationError { .. })));
    }

    #[test]
    fn invalid_toml_is_a_config_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[url\nmax_length = ").unwrap();
        assert!(matches!(
            ConfigManager::load_from(&path),
            Err(PhishGuardError::ConfigurationFileError { .. })
        ));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.email.patterns.push(PatternCategory::new("urgency", &["now"]));
        config.email.patterns.push(PatternCategory::new("empty", &[]));
        config.fetch.timeout_secs = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("Duplicate pattern category: urgency")));
    }
}
