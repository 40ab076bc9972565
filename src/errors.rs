// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

/// Why an error could not be classified as an [`ErrorCode`](crate::ErrorCode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("not a tagged error")]
    NotTagged,

    #[error("tag type mismatch: expected {expected}, found {found}")]
    TagTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
