#![allow(clippy::unwrap_used, clippy::expect_used)]

use personnel_core::errors::ExErrorKind;
use personnel_core::logging_facility::test_capture::init_test_capture;
use personnel_core::{log_op_end, log_op_error, log_op_start, EntityKind, PersonnelError};
use personnel_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "core_log_start_unique_1";

    log_op_start!(op_name, employee_id = 4_u64);

    capture.assert_event_exists(op_name, EVENT_START);
    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].fields.get("employee_id"), Some(&"4".to_string()));
    assert!(events[0].component.is_some());
}

#[test]
fn test_log_op_end_carries_duration() {
    let capture = init_test_capture();
    let op_name = "core_log_end_unique_2";

    log_op_end!(op_name, duration_ms = 42_u64);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1);
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_stable_code() {
    let capture = init_test_capture();
    let op_name = "core_log_error_unique_3";

    let err = PersonnelError::not_found(EntityKind::Employee, 9);
    log_op_error!(op_name, err, duration_ms = 1_u64);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        events[0].fields.get(FIELD_ERR_CODE),
        Some(&ExErrorKind::NotFound.code().to_string())
    );
    assert_eq!(events[0].level, tracing::Level::ERROR);
}
