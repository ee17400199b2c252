use crate::validate::ValidationError;
use crate::wizard::Step;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdBoardError {
    #[error("Ad not found: {0}")]
    AdNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot {action} while the form is at the {step} step")]
    InvalidTransition { step: Step, action: &'static str },

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AdBoardError>;
