pub const HOT_SEARCH_URL: &str = "https://top.baidu.com/board?tab=realtime";
pub const DEFAULT_SOURCE: &str = "baidu-hotsearch";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const LATEST_FILE_NAME: &str = "latest.json";

pub const CONFIG_FILE_NAME: &str = "hotsearch.json";
pub const CONFIG_PATH_ENV: &str = "HOTSEARCH_CONFIG";
pub const ENV_PREFIX: &str = "HOTSEARCH_";

pub const DEFAULT_TIMEOUT_IN_SECONDS: u64 = 15;
pub const EXPONENTIAL_BACKOFF_BASE: u64 = 2;
pub const BACKOFF_FACTOR_IN_MILLIS: u64 = 250;

pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
