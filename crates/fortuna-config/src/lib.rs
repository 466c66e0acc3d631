use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fortuna_core::{CoreError, WheelLayout};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "fortuna";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 10_000;

/// Environment variable holding the Data API bearer token. The token is
/// never read from the config file.
pub const API_TOKEN_ENV: &str = "FORTUNA_API_TOKEN";

/// Environment variable holding the chat platform bot token, same rule.
pub const BOT_TOKEN_ENV: &str = "FORTUNA_BOT_TOKEN";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub wheel: WheelLayout,
    pub poller: PollerConfig,
    pub api: Option<ApiConfig>,
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval_ms: u64,
    pub timeout_ms: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
        }
    }
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wheel: WheelLayout::default(),
            poller: PollerConfig::default(),
            api: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid wheel layout: {0}")]
    InvalidWheel(#[from] CoreError),
    #[error("invalid poller interval_ms: {0}")]
    InvalidPollInterval(u64),
    #[error("poller timeout_ms {timeout_ms} is shorter than interval_ms {interval_ms}")]
    InvalidPollTimeout { interval_ms: u64, timeout_ms: u64 },
    #[error("api base_url must use https: {0}")]
    InsecureApiBaseUrl(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    wheel: Option<WheelFile>,
    poller: Option<PollerFile>,
    api: Option<ApiFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WheelFile {
    sector_count: Option<usize>,
    excluded: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PollerFile {
    interval_ms: Option<u64>,
    timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApiFile {
    base_url: String,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(wheel) = parsed.wheel {
        let sector_count = wheel
            .sector_count
            .unwrap_or_else(|| config.wheel.sector_count());
        let excluded = wheel
            .excluded
            .unwrap_or_else(|| config.wheel.excluded().to_vec());
        config.wheel = WheelLayout::new(sector_count, excluded)?;
    }

    if let Some(poller) = parsed.poller {
        if let Some(interval_ms) = poller.interval_ms {
            if interval_ms == 0 {
                return Err(ConfigError::InvalidPollInterval(interval_ms));
            }
            config.poller.interval_ms = interval_ms;
        }
        if let Some(timeout_ms) = poller.timeout_ms {
            config.poller.timeout_ms = timeout_ms;
        }
        if config.poller.timeout_ms < config.poller.interval_ms {
            return Err(ConfigError::InvalidPollTimeout {
                interval_ms: config.poller.interval_ms,
                timeout_ms: config.poller.timeout_ms,
            });
        }
    }

    if let Some(api) = parsed.api {
        if !api.base_url.starts_with("https://") {
            return Err(ConfigError::InsecureApiBaseUrl(api.base_url));
        }
        config.api = Some(ApiConfig {
            base_url: api.base_url,
        });
    }

    Ok(config)
}
