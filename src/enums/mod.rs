pub mod commands;
pub mod fetch_error;
pub mod verdict;
