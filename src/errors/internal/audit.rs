use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Synthetic burst rejected: {0}")]
    InvalidBurst(String),

    #[error("Failed to serialize audit details: {0}")]
    Serialization(#[from] serde_json::Error),
}
