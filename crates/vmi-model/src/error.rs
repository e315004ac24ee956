use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid class name: {0:?}")]
    InvalidClassName(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
