pub mod cli;
pub mod config;
pub mod check_outcome;
pub mod score_card;
pub mod url_analysis;
pub mod email_analysis;
