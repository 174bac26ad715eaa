use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Feed request failed: {0}")]
    FeedError(#[from] reqwest::Error),

    #[error("Feed {url} returned HTTP status {status}")]
    FeedStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
