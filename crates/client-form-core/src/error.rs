//! Error Types

use thiserror::Error;

use crate::form::Violations;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend answered with HTTP {0}")]
    Status(u16),
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Why a form could not be turned into a payload
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("invalid fields: {}", .0.field_names().collect::<Vec<_>>().join(", "))]
    Invalid(Violations),
    #[error("form values do not describe a record: {0}")]
    Malformed(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
