use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "phishguard")]
#[clap(about = "Heuristic phishing detection for URLs and emails", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/phishguard/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
