//! Domain model: status codes, outcomes and their data-carrying variant.

pub mod data_outcome;
pub mod errors;
pub mod outcome;
pub mod status;

pub use data_outcome::DataOutcome;
pub use errors::EnvelopeError;
pub use outcome::{ERROR_MESSAGE, FAILURE_MESSAGE, Outcome, SUCCESS_MESSAGE};
pub use status::StatusCode;
