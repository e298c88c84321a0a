use std::env;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::utils::consts::{
    CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_DATA_DIR, DEFAULT_SOURCE,
    DEFAULT_TIMEOUT_IN_SECONDS, DESKTOP_USER_AGENT, ENV_PREFIX, HOT_SEARCH_URL,
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub source: String,
    pub data_dir: PathBuf,
    pub timeout_secs: u64,
    pub user_agents: Vec<String>,
    pub fetch_retries: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: HOT_SEARCH_URL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            timeout_secs: DEFAULT_TIMEOUT_IN_SECONDS,
            user_agents: vec![DESKTOP_USER_AGENT.to_string()],
            fetch_retries: 0,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the optional JSON file, then `HOTSEARCH_*` variables.
    pub fn load() -> Result<Config, figment::Error> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or(CONFIG_FILE_NAME.to_string());

        Config::figment(config_path).extract()
    }

    pub fn figment(config_path: impl Into<PathBuf>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(config_path.into()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
