#![allow(clippy::unwrap_used, clippy::expect_used)]

use treesnap_core::errors::{ExError, ExErrorKind, TreeSnapError};
use treesnap_core::logging_facility::test_capture::init_test_capture;
use treesnap_core::treesnap_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_FILE_COUNT, FIELD_ROOT,
};
use treesnap_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, root = "/data");

    let starts: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field(FIELD_ROOT), Some("/data"));
}

#[test]
fn test_log_op_end_macro_records_duration_and_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64, file_count = 7u64);

    let ends: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(ends[0].field(FIELD_FILE_COUNT), Some("7"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = TreeSnapError::Io {
        op: "hash_file".to_string(),
        path: "a.txt".to_string(),
        message: "file vanished".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let errors: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_IO"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("Io"));
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::NotFound).with_message("no root");
    log_op_error!(op_name, err, duration_ms = 1u64);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
}
