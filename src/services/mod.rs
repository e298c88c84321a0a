pub mod hot_search_service;
