//! Query module for read-only operations
//!
//! Every query here takes a shared reference to a `StoreContext` and never
//! mutates it. Results are deterministically ordered, and records whose
//! owner no longer resolves are skipped rather than reported as errors.

pub mod analytics;

pub use analytics::{
    average_age_by_department, employees_by_department, employees_in_multiple_departments,
    termination_archive, top_employees_by_seniority, top_five_by_seniority,
    union_benefits_last_year, TerminationRecord, UnionBenefitRecord, BENEFIT_WINDOW_DAYS,
    TOP_SENIORITY_LIMIT,
};
