use thiserror::Error;

/// Errors produced by the edit-distance engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The inputs cannot be processed as supplied.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
