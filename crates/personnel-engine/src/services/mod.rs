//! Service handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every service operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Errors leaving a service carry the operation name and the request id.

pub mod analytics;
pub mod crud;
pub mod department;
pub mod employee;
pub mod relation;

pub use analytics::AnalyticsService;
pub use crud::CrudService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use relation::RelationService;

use personnel_core::{log_op_end, log_op_error, log_op_start, ExError};
use personnel_core_types::RequestContext;
use personnel_store::errors::Result;
use std::time::Instant;

/// Run one service operation inside start/end logging
pub(crate) fn instrumented<T>(
    op: &'static str,
    request: &RequestContext,
    body: impl FnOnce() -> Result<T>,
) -> Result<T> {
    log_op_start!(op, request_id = request.request_id.as_str());
    let start = Instant::now();

    let result = body().map_err(|e| {
        let mut e: ExError = e.with_op(op).with_request_id(request.request_id.clone());
        if let Some(trace_id) = &request.trace_id {
            e = e.with_trace_id(trace_id.clone());
        }
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request.request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request.request_id.as_str()
    );

    Ok(result)
}
