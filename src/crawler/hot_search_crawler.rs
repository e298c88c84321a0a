use std::path::PathBuf;

use log::info;

use crate::{
    errors::CrawlError, models::snapshot::Snapshot, repos::snapshot_repo::SnapshotRepository,
    scraper::hot_search_scraper::parse_hot_search,
    services::hot_search_service::HotSearchService,
};

pub struct HotSearchCrawler {
    hot_search_service: HotSearchService,
    snapshot_repo: SnapshotRepository,
}

impl HotSearchCrawler {
    pub fn new(
        hot_search_service: HotSearchService,
        snapshot_repo: SnapshotRepository,
    ) -> HotSearchCrawler {
        HotSearchCrawler {
            hot_search_service,
            snapshot_repo,
        }
    }

    /// One fetch, one parse, one save. Nothing touches disk unless the page
    /// was fetched and fully parsed.
    pub async fn crawl(&self) -> Result<PathBuf, CrawlError> {
        info!("Start hot search crawler");

        let html = self.hot_search_service.fetch_page().await?;
        let items = parse_hot_search(&html)?;

        let snapshot = Snapshot::now(items);
        self.snapshot_repo.save(&snapshot)
    }
}
