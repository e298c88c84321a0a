pub mod hot_search_scraper;
