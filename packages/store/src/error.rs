use thiserror::Error;

/// Failure while reading or writing persisted client state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid json: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("browser storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
