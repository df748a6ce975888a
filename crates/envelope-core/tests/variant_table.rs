//! Canonical variant defaults, checked through the public API only.

use envelope_core::{DataOutcome, Outcome, StatusCode};
use rstest::rstest;

const OK_MSG: &str = "Operation completed successfully.";
const FAILED_MSG: &str = "Operation failed.";
const ERROR_MSG: &str = "An error occurred.";

#[rstest]
#[case::success(Outcome::success(), true, OK_MSG, StatusCode::Ok)]
#[case::success_message(Outcome::success_message("done"), true, "done", StatusCode::Ok)]
#[case::success_with(
    Outcome::success_with("accepted", StatusCode::Accepted),
    true,
    "accepted",
    StatusCode::Accepted
)]
#[case::error(Outcome::error(), false, FAILED_MSG, StatusCode::BadRequest)]
#[case::error_with(
    Outcome::error_with("nope", StatusCode::Unauthorized),
    false,
    "nope",
    StatusCode::Unauthorized
)]
fn outcome_variants(
    #[case] outcome: Outcome,
    #[case] flag: bool,
    #[case] message: &str,
    #[case] code: StatusCode,
) {
    assert_eq!(outcome.is_successful(), flag);
    assert_eq!(outcome.status_message(), message);
    assert_eq!(outcome.status_code(), code);
}

#[rstest]
#[case::success(DataOutcome::success(), true, OK_MSG, StatusCode::Ok, None)]
#[case::success_data(DataOutcome::success_data(42), true, OK_MSG, StatusCode::Ok, Some(42))]
#[case::success_message(
    DataOutcome::success_message("fine"),
    true,
    "fine",
    StatusCode::Ok,
    None
)]
#[case::success_data_message(
    DataOutcome::success_data_message(1, "fine"),
    true,
    "fine",
    StatusCode::Ok,
    Some(1)
)]
#[case::success_data_with(
    DataOutcome::success_data_with(2, "made", StatusCode::Created),
    true,
    "made",
    StatusCode::Created,
    Some(2)
)]
#[case::error(DataOutcome::error(), false, ERROR_MSG, StatusCode::BadRequest, None)]
#[case::error_data(
    DataOutcome::error_data(3),
    false,
    ERROR_MSG,
    StatusCode::BadRequest,
    Some(3)
)]
#[case::error_with(
    DataOutcome::error_with("bad", StatusCode::NotFound),
    false,
    "bad",
    StatusCode::NotFound,
    None
)]
#[case::error_data_with(
    DataOutcome::error_data_with(4, "boom", StatusCode::InternalServerError),
    false,
    "boom",
    StatusCode::InternalServerError,
    Some(4)
)]
fn data_outcome_variants(
    #[case] outcome: DataOutcome<i32>,
    #[case] flag: bool,
    #[case] message: &str,
    #[case] code: StatusCode,
    #[case] data: Option<i32>,
) {
    assert_eq!(outcome.is_successful(), flag);
    assert_eq!(outcome.status_message(), message);
    assert_eq!(outcome.status_code(), code);
    assert_eq!(outcome.result_data().copied(), data);
}

#[test]
fn new_preserves_flag_for_both_values() {
    for flag in [true, false] {
        assert_eq!(Outcome::new(flag).is_successful(), flag);
        assert_eq!(DataOutcome::new((), flag).is_successful(), flag);
    }
}

#[test]
fn payload_identity_is_preserved() {
    let payload = vec!["a".to_string(), "b".to_string()];
    let ptr = payload.as_ptr();
    let outcome = DataOutcome::success_data(payload);
    let back = outcome.into_result_data().unwrap();
    assert_eq!(back.as_ptr(), ptr);
    assert_eq!(back, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn envelopes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome>();
    assert_send_sync::<DataOutcome<Vec<String>>>();
}

#[test]
fn service_style_usage() {
    fn divide(a: i32, b: i32) -> DataOutcome<i32> {
        if b == 0 {
            return DataOutcome::error_with("division by zero", StatusCode::UnprocessableEntity);
        }
        DataOutcome::success_data(a / b)
    }

    let ok = divide(10, 2);
    assert!(ok.is_successful());
    assert_eq!(ok.into_result(), Ok(Some(5)));

    let err = divide(1, 0).into_result().unwrap_err();
    assert_eq!(err.status_code(), StatusCode::UnprocessableEntity);
    assert!(err.to_string().contains("division by zero"));
}
