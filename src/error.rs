use std::path::PathBuf;

use thiserror::Error;

use crate::models::Purpose;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Config(Vec<&'static str>),

    #[error("listings fetch for {purpose} failed: {reason}")]
    Provider { purpose: Purpose, reason: String },

    #[error("message delivery failed: {0}")]
    Delivery(String),

    #[error("state file {}: {source}", path.display())]
    State {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;
