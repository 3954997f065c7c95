//! Error types for password generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
