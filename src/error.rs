use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("no snapshot files found in {0}")]
    NoSnapshots(String),

    #[error("snapshot parse error: {0}")]
    SnapshotParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid instant: {0} (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidInstant(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HealthError>;
