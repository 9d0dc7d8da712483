use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::SAMPLE_URLS;
use crate::enums::commands::Commands;
use crate::errors::{PhishGuardError, PhishGuardResult};
use crate::logger::report_formatter::ReportFormatter;
use crate::services::email_analyzer::EmailAnalyzer;
use crate::services::url_analyzer::UrlAnalyzer;
use crate::structs::config::config::Config;
use crate::ui::analysis_server::{AnalysisServer, AnalyzerState};

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> PhishGuardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Url { url, json, offline } => self.url_command(&url, json, offline).await,
            Commands::Email { file, json } => self.email_command(file.as_deref(), json),
            Commands::Test { offline } => self.test_command(offline).await,
            Commands::Serve { host, port, open } => self.serve_command(host, port, open).await,
            Commands::Init => self.init_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> PhishGuardResult<Config> {
        match &self.config_path {
            Some(path) => ConfigManager::load_from(path),
            None => ConfigManager::load(),
        }
    }

    fn url_analyzer(&self, offline: bool) -> PhishGuardResult<UrlAnalyzer> {
        let mut config = self.load_config()?;
        if offline {
            config.fetch.enabled = false;
        }
        UrlAnalyzer::from_config(&config)
    }

    async fn url_command(&self, url: &str, json: bool, offline: bool) -> PhishGuardResult<()> {
        if url.trim().is_empty() {
            return Err(PhishGuardError::input_error(
                url,
                "a URL to analyze",
                "Usage: phishguard url https://example.com",
            ));
        }

        let analyzer = self.url_analyzer(offline)?;
        let analysis = analyzer.analyze(url).await;

        if json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print!("{}", ReportFormatter::url_report(&analysis));
        }
        Ok(())
    }

    fn email_command(&self, file: Option<&Path>, json: bool) -> PhishGuardResult<()> {
        let text = match file {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                PhishGuardError::file_error(&path.display().to_string(), "read", &e.to_string())
            })?,
            None => {
                log::info!("📥 Reading email from stdin...");
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let config = self.load_config()?;
        let analyzer = EmailAnalyzer::new(&config.email)?;
        let analysis = analyzer.analyze(&text);

        if json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print!("{}", ReportFormatter::email_report(&analysis));
        }
        Ok(())
    }

    async fn test_command(&self, offline: bool) -> PhishGuardResult<()> {
        log::info!("🧪 Running test cases...");
        let analyzer = self.url_analyzer(offline)?;

        for url in SAMPLE_URLS {
            println!("\n{}", "=".repeat(60));
            println!("Testing: {url}");
            let analysis = analyzer.analyze(url).await;
            print!("{}", ReportFormatter::url_report(&analysis));
        }
        Ok(())
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>, open: bool) -> PhishGuardResult<()> {
        let config = self.load_config()?;
        let state = AnalyzerState {
            url_analyzer: UrlAnalyzer::from_config(&config)?,
            email_analyzer: EmailAnalyzer::new(&config.email)?,
        };

        let host = host.unwrap_or_else(|| config.server.host.clone());
        let port = port.unwrap_or(config.server.port);

        log::info!("🚀 Starting PhishGuard server...");
        AnalysisServer::new(state).run(&host, port, open).await
    }

    fn init_command(&self) -> PhishGuardResult<()> {
        log::info!("🚀 Initializing PhishGuard configuration...");

        let path = match &self.config_path {
            Some(path) => {
                ConfigManager::write_sample_config(path)?;
                path.clone()
            }
            None => ConfigManager::create_sample_config()?,
        };

        log::info!("📝 Edit {} to tune keywords and pattern categories.", path.display());
        Ok(())
    }
}
