//! envelope-core
//!
//! Uniform result envelopes for application code.
//!
//! - **domain**: `Outcome`, `DataOutcome<T>`, `StatusCode`, `EnvelopeError`
//! - **report**: structured logging of envelopes through `tracing`
//!
//! ```
//! use envelope_core::{DataOutcome, StatusCode};
//!
//! fn find_user(id: u32) -> DataOutcome<String> {
//!     if id == 1 {
//!         DataOutcome::success_data("alice".to_string())
//!     } else {
//!         DataOutcome::error_with(format!("user {id} not found"), StatusCode::NotFound)
//!     }
//! }
//!
//! let found = find_user(1);
//! assert!(found.is_successful());
//! assert_eq!(found.result_data().map(String::as_str), Some("alice"));
//!
//! let missing = find_user(2);
//! assert_eq!(missing.status_code(), StatusCode::NotFound);
//! assert!(missing.result_data().is_none());
//! ```

pub mod domain;
pub mod report;

pub use domain::{
    DataOutcome, ERROR_MESSAGE, EnvelopeError, FAILURE_MESSAGE, Outcome, SUCCESS_MESSAGE,
    StatusCode,
};
