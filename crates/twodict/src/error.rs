use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("dictionary is empty")]
    Empty,
}
