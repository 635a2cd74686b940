// Services emit start/end/end_error events through the logging facility.

mod common;

use common::{employee_input, services};
use personnel_core::logging_facility::test_capture::init_test_capture;
use personnel_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};
use personnel_core_types::{RequestContext, RequestId};
use personnel_engine::CrudService;

#[test]
fn test_service_emits_start_and_end() {
    let capture = init_test_capture();
    let s = services();
    let request = RequestContext::with_request_id(RequestId::from_string("log-create-1".into()));

    s.employees.create(&request, employee_input("A", "A")).unwrap();

    let events: Vec<_> = capture
        .events_for_op("employee_create")
        .into_iter()
        .filter(|e| e.fields.get("request_id").map(String::as_str) == Some("log-create-1"))
        .collect();
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_START)));
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_END)));
}

#[test]
fn test_failed_operation_logs_error_code() {
    let capture = init_test_capture();
    let s = services();
    let request = RequestContext::with_request_id(RequestId::from_string("log-delete-2".into()));

    assert!(s.employees.delete(&request, 1234).is_err());

    let errors: Vec<_> = capture
        .events_for_op("employee_delete")
        .into_iter()
        .filter(|e| e.fields.get("request_id").map(String::as_str) == Some("log-delete-2"))
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].fields.get(FIELD_ERR_CODE).map(String::as_str),
        Some("ERR_NOT_FOUND")
    );
}
