use fortuna_core::CoreError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("identity sdk error: {0}")]
    Sdk(String),
    #[error("host bindings not ready after {waited:?}")]
    ReadyTimeout { waited: Duration },
    #[error("readiness wait cancelled")]
    Cancelled,
    #[cfg(any(feature = "data-api", feature = "broadcast"))]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(any(feature = "data-api", feature = "broadcast"))]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(any(feature = "data-api", feature = "broadcast"))]
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[cfg(any(feature = "data-api", feature = "broadcast"))]
    #[error("invalid api endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
