pub mod baidu_board_response;
pub mod config;
pub mod hot_search_entry;
pub mod snapshot;
