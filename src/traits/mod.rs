pub mod page_fetcher;
