//! Error types for vivarium-hub

use thiserror::Error;

/// Result type for vivarium-hub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vivarium-hub
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The acting caller does not carry the required authority
    #[error("unauthorized: action requires {required}")]
    Unauthorized { required: String },

    /// Engine error
    #[error("core error: {0}")]
    Core(#[from] vivarium_core::Error),
}

impl Error {
    /// Get the core error if this wraps one
    pub fn as_core(&self) -> Option<&vivarium_core::Error> {
        match self {
            Error::Core(err) => Some(err),
            _ => None,
        }
    }
}
