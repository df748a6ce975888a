//! Outcome with a typed payload.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::errors::EnvelopeError;
use super::outcome::{ERROR_MESSAGE, Outcome, SUCCESS_MESSAGE};
use super::status::StatusCode;

/// An [`Outcome`] plus an optional payload.
///
/// The payload is stored as given and is readable regardless of the flag:
/// failures may carry data too (e.g. the rejected input). Callers should
/// check [`is_successful`](Self::is_successful) before trusting it.
///
/// Serialized flat, with `resultData` omitted when absent. A present key is
/// always a payload, even when its value is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataOutcome<T> {
    #[serde(flatten)]
    status: Outcome,

    #[serde(
        default = "Option::default",
        deserialize_with = "present_payload",
        skip_serializing_if = "Option::is_none"
    )]
    result_data: Option<T>,
}

/// Only called when `resultData` is present, so `null` stays a payload.
fn present_payload<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> DataOutcome<T> {
    /// Status fields as in [`Outcome::new`].
    pub fn new(result_data: T, is_successful: bool) -> Self {
        Self::from_parts(Outcome::new(is_successful), Some(result_data))
    }

    /// Status fields as in [`Outcome::with_status`].
    pub fn with_status(
        result_data: T,
        is_successful: bool,
        status_message: impl Into<String>,
        status_code: StatusCode,
    ) -> Self {
        Self::from_parts(
            Outcome::with_status(is_successful, status_message, status_code),
            Some(result_data),
        )
    }

    /// Reassemble an envelope from a status and an optional payload.
    pub fn from_parts(status: Outcome, result_data: Option<T>) -> Self {
        Self {
            status,
            result_data,
        }
    }

    // ---- success ----

    /// No payload, [`SUCCESS_MESSAGE`], `200 OK`.
    pub fn success() -> Self {
        Self::from_parts(Outcome::success(), None)
    }

    /// Payload, [`SUCCESS_MESSAGE`], `200 OK`.
    pub fn success_data(result_data: T) -> Self {
        Self::success_data_message(result_data, SUCCESS_MESSAGE)
    }

    /// No payload, custom message, `200 OK`.
    pub fn success_message(status_message: impl Into<String>) -> Self {
        Self::from_parts(Outcome::success_message(status_message), None)
    }

    /// Payload, custom message, `200 OK`.
    pub fn success_data_message(result_data: T, status_message: impl Into<String>) -> Self {
        Self::success_data_with(result_data, status_message, StatusCode::Ok)
    }

    /// Payload, custom message and code.
    pub fn success_data_with(
        result_data: T,
        status_message: impl Into<String>,
        status_code: StatusCode,
    ) -> Self {
        Self::with_status(result_data, true, status_message, status_code)
    }

    // ---- error ----

    /// No payload, [`ERROR_MESSAGE`], `400 Bad Request`.
    ///
    /// Note the message differs from [`Outcome::error`].
    pub fn error() -> Self {
        Self::error_with(ERROR_MESSAGE, StatusCode::BadRequest)
    }

    /// Payload, [`ERROR_MESSAGE`], `400 Bad Request`.
    pub fn error_data(result_data: T) -> Self {
        Self::error_data_with(result_data, ERROR_MESSAGE, StatusCode::BadRequest)
    }

    /// No payload, custom message and code.
    pub fn error_with(status_message: impl Into<String>, status_code: StatusCode) -> Self {
        Self::from_parts(Outcome::error_with(status_message, status_code), None)
    }

    /// Payload, custom message and code.
    pub fn error_data_with(
        result_data: T,
        status_message: impl Into<String>,
        status_code: StatusCode,
    ) -> Self {
        Self::with_status(result_data, false, status_message, status_code)
    }

    /// `Ok(v)` becomes [`success_data`](Self::success_data); `Err(e)` becomes
    /// [`error_with`](Self::error_with) using the error's `Display` text.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>, error_code: StatusCode) -> Self {
        match result {
            Ok(value) => Self::success_data(value),
            Err(e) => Self::error_with(e.to_string(), error_code),
        }
    }

    // ---- accessors ----

    /// Check this before trusting the payload.
    pub fn is_successful(&self) -> bool {
        self.status.is_successful()
    }

    /// Human-readable message.
    pub fn status_message(&self) -> &str {
        self.status.status_message()
    }

    /// Status code; not guaranteed to agree with the flag.
    pub fn status_code(&self) -> StatusCode {
        self.status.status_code()
    }

    /// The status fields without the payload.
    pub fn status(&self) -> &Outcome {
        &self.status
    }

    /// See [`Outcome::is_consistent`].
    pub fn is_consistent(&self) -> bool {
        self.status.is_consistent()
    }

    /// The payload, whatever the flag says.
    pub fn result_data(&self) -> Option<&T> {
        self.result_data.as_ref()
    }

    /// Take the payload, discarding the status.
    pub fn into_result_data(self) -> Option<T> {
        self.result_data
    }

    /// Split into status and payload; inverse of [`from_parts`](Self::from_parts).
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.status, self.result_data)
    }

    // ---- conversions ----

    /// Transform the payload, keeping the status fields.
    pub fn map<U, F>(self, f: F) -> DataOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        DataOutcome {
            status: self.status,
            result_data: self.result_data.map(f),
        }
    }

    /// Lift into `std::result::Result`, passing the payload through on success.
    ///
    /// A payload attached to a failure is dropped.
    pub fn into_result(self) -> Result<Option<T>, EnvelopeError> {
        let (status, result_data) = self.into_parts();
        status.into_result().map(|()| result_data)
    }
}

impl<T: Default> DataOutcome<T> {
    /// The payload, or `T::default()` when none was supplied.
    pub fn into_result_data_or_default(self) -> T {
        self.result_data.unwrap_or_default()
    }
}

impl<T> From<Outcome> for DataOutcome<T> {
    fn from(status: Outcome) -> Self {
        Self::from_parts(status, None)
    }
}

impl<T> From<DataOutcome<T>> for Outcome {
    fn from(outcome: DataOutcome<T>) -> Self {
        outcome.status
    }
}

impl<T> fmt::Display for DataOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status, f)
    }
}
