pub mod url_analyzer;
pub mod email_analyzer;
pub mod page_fetcher;
