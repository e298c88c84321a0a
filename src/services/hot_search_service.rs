use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;
use reqwest::Client;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;

use crate::errors::CrawlError;
use crate::models::config::Config;
use crate::utils::consts::{
    BACKOFF_FACTOR_IN_MILLIS, DESKTOP_USER_AGENT, EXPONENTIAL_BACKOFF_BASE,
};

pub struct HotSearchService {
    client: Client,
    url: String,
    user_agents: Vec<String>,
    retries: usize,
}

impl HotSearchService {
    pub fn new(config: &Config) -> Result<HotSearchService, CrawlError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| CrawlError::Network {
                url: config.url.clone(),
                source,
            })?;

        Ok(HotSearchService {
            client,
            url: config.url.clone(),
            user_agents: config.user_agents.clone(),
            retries: config.fetch_retries,
        })
    }

    /// Fetches the board page, retrying `fetch_retries` extra times.
    pub async fn fetch_page(&self) -> Result<String, CrawlError> {
        let retry_strategy = ExponentialBackoff::from_millis(EXPONENTIAL_BACKOFF_BASE)
            .factor(BACKOFF_FACTOR_IN_MILLIS)
            .map(jitter)
            .take(self.retries);

        let mut attempt = 0;
        Retry::spawn(retry_strategy, || {
            attempt += 1;
            self.request_page(attempt)
        })
        .await
    }

    async fn request_page(&self, attempt: usize) -> Result<String, CrawlError> {
        let user_agent = self.get_user_agent();
        debug!("Requesting {} (attempt {}) as {}", self.url, attempt, user_agent);

        let result = self.send(&user_agent).await;
        if let Err(err) = &result {
            if attempt <= self.retries {
                warn!("Attempt {} failed: {}", attempt, err);
            }
        }

        result
    }

    async fn send(&self, user_agent: &str) -> Result<String, CrawlError> {
        let resp = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|source| self.network_error(source))?;

        if !resp.status().is_success() {
            return Err(CrawlError::Status {
                url: self.url.clone(),
                status: resp.status().as_u16(),
            });
        }

        let html = resp.text().await.map_err(|source| self.network_error(source))?;
        info!("Fetched {} ({} bytes)", self.url, html.len());

        Ok(html)
    }

    fn network_error(&self, source: reqwest::Error) -> CrawlError {
        CrawlError::Network {
            url: self.url.clone(),
            source,
        }
    }

    fn get_user_agent(&self) -> String {
        if self.user_agents.is_empty() {
            return DESKTOP_USER_AGENT.to_string();
        }

        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..self.user_agents.len());

        self.user_agents[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, retries: usize) -> Config {
        Config {
            url: format!("{}/board", server.uri()),
            fetch_retries: retries,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/board"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>board</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let service = HotSearchService::new(&config_for(&server, 0)).unwrap();
        let html = service.fetch_page().await.unwrap();

        assert_eq!(html, "<html>board</html>");
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let service = HotSearchService::new(&config_for(&server, 0)).unwrap();
        let err = service.fetch_page().await.unwrap_err();

        assert!(err.is_network());
        assert!(matches!(err, CrawlError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn retries_until_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let service = HotSearchService::new(&config_for(&server, 2)).unwrap();

        assert!(service.fetch_page().await.is_err());
    }

    #[test]
    fn falls_back_to_default_user_agent() {
        let config = Config {
            user_agents: vec![],
            ..Config::default()
        };
        let service = HotSearchService::new(&config).unwrap();

        assert_eq!(service.get_user_agent(), DESKTOP_USER_AGENT);
    }
}
