//! Analytics service
//!
//! Read-only reporting over a shared context. "Today" comes from the
//! injected clock at the moment of each call.

use personnel_core::queries::{self, TerminationRecord, UnionBenefitRecord};
use personnel_core::{Clock, Employee, StoreContext};
use personnel_core_types::RequestContext;
use personnel_store::errors::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::instrumented;
use crate::context::{read, SharedContext};
use crate::dto::EmployeeDto;

#[derive(Clone)]
pub struct AnalyticsService {
    ctx: SharedContext,
    clock: Arc<dyn Clock>,
}

fn to_dtos(employees: Vec<&Employee>, ctx: &StoreContext) -> Vec<EmployeeDto> {
    employees
        .into_iter()
        .map(|e| EmployeeDto::from_model(e, ctx))
        .collect()
}

impl AnalyticsService {
    pub fn new(ctx: SharedContext, clock: Arc<dyn Clock>) -> Self {
        Self { ctx, clock }
    }

    /// Employees whose department label equals `department` exactly
    ///
    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    pub fn employees_by_department(
        &self,
        request: &RequestContext,
        department: &str,
    ) -> Result<Vec<EmployeeDto>> {
        instrumented("analytics_by_department", request, || {
            let ctx = read(&self.ctx)?;
            let found = queries::employees_by_department(&ctx, department);
            Ok(to_dtos(found, &ctx))
        })
    }

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    pub fn employees_in_multiple_departments(
        &self,
        request: &RequestContext,
    ) -> Result<Vec<EmployeeDto>> {
        instrumented("analytics_multiple_departments", request, || {
            let ctx = read(&self.ctx)?;
            let found = queries::employees_in_multiple_departments(&ctx);
            Ok(to_dtos(found, &ctx))
        })
    }

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    pub fn termination_archive(&self, request: &RequestContext) -> Result<Vec<TerminationRecord>> {
        instrumented("analytics_termination_archive", request, || {
            let ctx = read(&self.ctx)?;
            Ok(queries::termination_archive(&ctx))
        })
    }

    /// Mean age per department label, ordered by label
    ///
    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    pub fn average_age_by_department(
        &self,
        request: &RequestContext,
    ) -> Result<BTreeMap<String, f64>> {
        instrumented("analytics_average_age", request, || {
            let ctx = read(&self.ctx)?;
            Ok(queries::average_age_by_department(&ctx, self.clock.today()))
        })
    }

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    pub fn union_benefits_last_year(
        &self,
        request: &RequestContext,
    ) -> Result<Vec<UnionBenefitRecord>> {
        instrumented("analytics_union_benefits", request, || {
            let ctx = read(&self.ctx)?;
            Ok(queries::union_benefits_last_year(&ctx, self.clock.today()))
        })
    }

    /// # Errors
    /// `Concurrency` if the shared context is unavailable
    pub fn top_five_by_seniority(&self, request: &RequestContext) -> Result<Vec<EmployeeDto>> {
        instrumented("analytics_top_seniority", request, || {
            let ctx = read(&self.ctx)?;
            let found = queries::top_five_by_seniority(&ctx);
            Ok(to_dtos(found, &ctx))
        })
    }
}
