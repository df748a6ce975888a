//! Outcome model: the common envelope for "did it work?".
//!
//! An `Outcome` carries a success flag, a human-readable message and a
//! status code. It is built once and only read afterwards. There is no
//! payload here; see [`DataOutcome`](super::data_outcome::DataOutcome) for that.
//!
//! The flag and the code are *expected* to agree (success with 2xx, failure
//! with anything else), but nothing enforces it. Use
//! [`Outcome::is_consistent`] if you want to check.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::EnvelopeError;
use super::status::StatusCode;

/// Message used by success constructors that take no message.
pub const SUCCESS_MESSAGE: &str = "Operation completed successfully.";

/// Message used by [`Outcome::new`] / [`Outcome::error`] for failures.
pub const FAILURE_MESSAGE: &str = "Operation failed.";

/// Message used by the data-carrying error constructors that take no message.
pub const ERROR_MESSAGE: &str = "An error occurred.";

/// Result envelope without a payload.
///
/// Serialized with camelCase keys:
/// `{"isSuccessful":true,"statusMessage":"...","statusCode":200}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    is_successful: bool,
    status_message: String,
    status_code: StatusCode,
}

impl Outcome {
    /// Derives message and code from the flag: `200 OK` with
    /// [`SUCCESS_MESSAGE`], or `400 Bad Request` with [`FAILURE_MESSAGE`].
    pub fn new(is_successful: bool) -> Self {
        if is_successful {
            Self::with_status(true, SUCCESS_MESSAGE, StatusCode::Ok)
        } else {
            Self::with_status(false, FAILURE_MESSAGE, StatusCode::BadRequest)
        }
    }

    /// Stores all three fields as given. No cross-field checks.
    pub fn with_status(
        is_successful: bool,
        status_message: impl Into<String>,
        status_code: StatusCode,
    ) -> Self {
        Self {
            is_successful,
            status_message: status_message.into(),
            status_code,
        }
    }

    pub fn success() -> Self {
        Self::new(true)
    }

    /// Success with a custom message and `200 OK`.
    pub fn success_message(status_message: impl Into<String>) -> Self {
        Self::success_with(status_message, StatusCode::Ok)
    }

    pub fn success_with(status_message: impl Into<String>, status_code: StatusCode) -> Self {
        Self::with_status(true, status_message, status_code)
    }

    pub fn error() -> Self {
        Self::new(false)
    }

    pub fn error_with(status_message: impl Into<String>, status_code: StatusCode) -> Self {
        Self::with_status(false, status_message, status_code)
    }

    pub fn is_successful(&self) -> bool {
        self.is_successful
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Whether the flag and the code follow the usual convention
    /// (success with 2xx, failure with non-2xx).
    pub fn is_consistent(&self) -> bool {
        self.is_successful == self.status_code.is_success()
    }

    /// Lift the envelope into `std::result::Result`.
    ///
    /// Only the flag is consulted; the code is carried into the error as is.
    pub fn into_result(self) -> Result<(), EnvelopeError> {
        if self.is_successful {
            Ok(())
        } else {
            Err(EnvelopeError::Failed {
                status_code: self.status_code,
                message: self.status_message,
            })
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status_code, self.status_message)
    }
}
