use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Score a single URL
    Url {
        url: String,
        /// Print the result as JSON
        #[clap(long)]
        json: bool,
        /// Skip fetching the page title
        #[clap(long)]
        offline: bool,
    },
    /// Score an email read from FILE, or from stdin when omitted
    Email {
        file: Option<PathBuf>,
        #[clap(long)]
        json: bool,
    },
    /// Run the built-in sample URLs
    Test {
        #[clap(long)]
        offline: bool,
    },
    /// Start the web front-end and JSON API
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the front page in a browser
        #[clap(long)]
        open: bool,
    },
    /// Write a sample configuration file
    Init,
}
