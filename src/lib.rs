pub mod crawler;
pub mod errors;
pub mod models;
pub mod repos;
pub mod scraper;
pub mod services;
pub mod utils;
