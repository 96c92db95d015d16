//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! a missing viewport, invalid configuration, configuration parse failures and IO.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("no viewport available to derive the spawn boundary")]
    NoViewport,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "ron")]
impl From<ron::error::SpannedError> for Error {
    fn from(value: ron::error::SpannedError) -> Self {
        Error::Parse(value.to_string())
    }
}
