//! Personnel Core - in-memory relational store and analytics kernel
//!
//! This crate provides the foundational data structures and operations for
//! the personnel ledger, including:
//! - Employee, Department and the four relationship record kinds
//! - A generic identity-assigning entity store and the `StoreContext` that owns one per kind
//! - Relation operations that attach links, history and union records to existing owners
//! - The six read-only analytics queries
//! - The structured error facility and logging facility shared by the other crates

pub mod clock;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;

#[doc(hidden)]
pub use personnel_core_types::schema as log_schema;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ExError, ExErrorKind, PersonnelError, Result};
pub use model::{
    Department, Employee, EmployeeDepartment, EmploymentHistory, EntityId, EntityKind,
    UnionBenefit, UnionMembership,
};
pub use ops::{DanglingDependents, DeleteReport, Entity, EntityStore, StoreContext};
