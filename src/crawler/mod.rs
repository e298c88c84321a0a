pub mod hot_search_crawler;
