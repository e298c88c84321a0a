use hotsearch_crawler::crawler::hot_search_crawler::HotSearchCrawler;
use hotsearch_crawler::errors::CrawlError;
use hotsearch_crawler::models::config::Config;
use hotsearch_crawler::repos::snapshot_repo::SnapshotRepository;
use hotsearch_crawler::services::hot_search_service::HotSearchService;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            SimpleLogger::new().with_level(LevelFilter::Info).init()?;
            error!("Invalid configuration: {}", err);
            return Err(err.into());
        }
    };

    SimpleLogger::new().with_level(config.level_filter()).init()?;

    info!("Crawling {} into {}", config.url, config.data_dir.display());

    let hot_search_service = HotSearchService::new(&config)?;
    let snapshot_repo = SnapshotRepository::new(&config.data_dir, &config.source);
    let crawler = HotSearchCrawler::new(hot_search_service, snapshot_repo);

    match crawler.crawl().await {
        Ok(daily_path) => {
            info!("Hot search snapshot written to {}", daily_path.display());
            Ok(())
        }
        Err(err) => {
            log_failure(&err);
            Err(err.into())
        }
    }
}

fn log_failure(err: &CrawlError) {
    match err {
        CrawlError::Parse(_) => {
            error!("{}. The board layout may have changed upstream", err)
        }
        _ if err.is_network() => error!("Error while fetching hot search: {}", err),
        _ => error!("Error while saving hot search: {}", err),
    }
}
