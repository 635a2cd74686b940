//! Personnel Engine - service layer
//!
//! Exposes the record mutation services and the analytics service over a
//! shared store context. Services translate between DTOs and domain models
//! and own lifecycle logging for every operation.

pub mod context;
pub mod dto;
pub mod services;

pub use context::{load_shared_context, shared_context, SharedContext};
pub use dto::{DepartmentCreateUpdateDto, DepartmentDto, EmployeeCreateUpdateDto, EmployeeDto};
pub use services::{AnalyticsService, CrudService, DepartmentService, EmployeeService, RelationService};
