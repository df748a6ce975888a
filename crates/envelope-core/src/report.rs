//! Structured logging for envelopes.
//!
//! The library only emits events; installing a subscriber is up to the
//! application.
//!
//! Level by outcome:
//! - success: `INFO`
//! - failure with a 4xx code: `WARN`
//! - any other failure: `ERROR`
//!
//! A flag/code pair that breaks the 2xx convention gets an extra `DEBUG` event.

use tracing::{debug, error, info, warn};

use crate::domain::{DataOutcome, Outcome};

/// Emit one event describing `outcome` for `operation`.
pub fn record(operation: &str, outcome: &Outcome) {
    let status_code = outcome.status_code().as_u16();
    let status_message = outcome.status_message();

    if outcome.is_successful() {
        info!(operation, status_code, status_message, "operation succeeded");
    } else if outcome.status_code().is_client_error() {
        warn!(operation, status_code, status_message, "operation rejected");
    } else {
        error!(operation, status_code, status_message, "operation failed");
    }

    if !outcome.is_consistent() {
        debug!(
            operation,
            status_code,
            is_successful = outcome.is_successful(),
            "success flag and status code disagree"
        );
    }
}

/// Same as [`record`], plus whether a payload is attached.
pub fn record_data<T>(operation: &str, outcome: &DataOutcome<T>) {
    record(operation, outcome.status());
    debug!(
        operation,
        has_result_data = outcome.result_data().is_some(),
        "envelope payload"
    );
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::Level;

    use super::*;
    use crate::domain::StatusCode;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        capture_at(Level::DEBUG, f)
    }

    fn capture_at(level: Level, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(level)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn success_is_info() {
        let out = capture(|| record("load_user", &Outcome::success()));
        assert!(out.contains("INFO"));
        assert!(out.contains("operation succeeded"));
        assert!(out.contains("status_code=200"));
        assert!(!out.contains("disagree"));
    }

    #[test]
    fn client_error_is_warn() {
        let out = capture(|| {
            record(
                "load_user",
                &Outcome::error_with("missing", StatusCode::NotFound),
            )
        });
        assert!(out.contains("WARN"));
        assert!(out.contains("status_code=404"));
    }

    #[test]
    fn server_error_is_error() {
        let out = capture(|| {
            record(
                "save_user",
                &Outcome::error_with("db down", StatusCode::ServiceUnavailable),
            )
        });
        assert!(out.contains("ERROR"));
        assert!(out.contains("status_code=503"));
    }

    #[test]
    fn inconsistent_pair_adds_debug_note() {
        let out = capture(|| {
            record(
                "odd",
                &Outcome::success_with("weird", StatusCode::InternalServerError),
            )
        });
        assert!(out.contains("INFO"));
        assert!(out.contains("DEBUG"));
        assert!(out.contains("disagree"));
    }

    #[test]
    fn record_data_reports_payload_presence() {
        let out = capture(|| record_data("find", &DataOutcome::success_data(3)));
        assert!(out.contains("has_result_data=true"));

        let out = capture(|| record_data("find", &DataOutcome::<u8>::error()));
        assert!(out.contains("has_result_data=false"));
    }

    #[test]
    fn warn_filter_hides_success_but_keeps_failures() {
        let out = capture_at(Level::WARN, || {
            record("quiet", &Outcome::success());
            record("quiet", &Outcome::success_with("odd", StatusCode::BadGateway));
        });
        assert!(out.is_empty());

        let out = capture_at(Level::WARN, || record("loud", &Outcome::error()));
        assert!(out.contains("WARN"));
        assert!(out.contains("status_code=400"));
    }
}
