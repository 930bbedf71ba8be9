pub mod compare_cmd;
pub mod core;
pub mod report;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeltaError {
    #[error("{0}")]
    Message(String),
    #[error("malformed benchmark identifier `{0}`")]
    MalformedIdentifier(String),
    #[error("invalid timing for `{0}`: candidate cpu_time is zero")]
    InvalidTiming(String),
    #[error("`{0}` is missing from the baseline feed")]
    MissingKey(String),
    #[error("`{key}` has no timing for competitor `{competitor}`")]
    MissingCompetitor { key: String, competitor: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type DeltaResult<T> = Result<T, DeltaError>;
