use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Insufficient credits")]
    InsufficientCredits,
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::InvalidArgument(errors.to_string())
    }
}
