use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unable to parse hot search page: {0}")]
    Parse(String),

    #[error("Unable to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    pub fn is_network(&self) -> bool {
        matches!(self, CrawlError::Status { .. } | CrawlError::Network { .. })
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> CrawlError {
        CrawlError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
