//! Errors raised at the edges of the envelope model.
//!
//! Building an envelope never fails. These only show up when parsing a
//! status code or when a failed envelope is turned into a `Result`.

use thiserror::Error;

use super::status::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("unknown status code {0}")]
    UnknownStatusCode(u16),

    #[error("invalid status code {0:?}: expected a decimal number")]
    InvalidStatusCode(String),

    /// A failed envelope, lifted into the error channel.
    #[error("operation failed with {status_code}: {message}")]
    Failed {
        status_code: StatusCode,
        message: String,
    },
}

impl EnvelopeError {
    /// Status code to report for this error.
    ///
    /// Parse errors are the caller's fault, so they map to `400 Bad Request`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            EnvelopeError::UnknownStatusCode(_) | EnvelopeError::InvalidStatusCode(_) => {
                StatusCode::BadRequest
            }
            EnvelopeError::Failed { status_code, .. } => *status_code,
        }
    }
}
