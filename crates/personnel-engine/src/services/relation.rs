use chrono::NaiveDate;
use personnel_core::model::{
    BenefitId, DepartmentId, EmployeeId, HistoryId, LinkId, MembershipId,
};
use personnel_core::ops::relation_ops;
use personnel_core::DeleteReport;
use personnel_core_types::RequestContext;
use personnel_store::errors::Result;

use super::instrumented;
use crate::context::{write, SharedContext};

/// Attaches links, employment periods and union records to existing owners
#[derive(Debug, Clone)]
pub struct RelationService {
    ctx: SharedContext,
}

impl RelationService {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }

    /// # Errors
    /// `MissingOwner` if the employee or the department does not exist
    pub fn link_employee_to_department(
        &self,
        request: &RequestContext,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> Result<LinkId> {
        instrumented("department_link_create", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(relation_ops::link_employee_to_department(
                &mut ctx,
                employee_id,
                department_id,
            )?)
        })
    }

    /// # Errors
    /// `MissingOwner` if the employee does not exist, `InvalidInput` if the
    /// period ends before it starts
    pub fn record_employment(
        &self,
        request: &RequestContext,
        employee_id: EmployeeId,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        position: Option<String>,
    ) -> Result<HistoryId> {
        instrumented("employment_record", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(relation_ops::record_employment(
                &mut ctx,
                employee_id,
                hire_date,
                termination_date,
                position,
            )?)
        })
    }

    /// # Errors
    /// `NotFound` if the record does not exist, `InvalidInput` if the date
    /// precedes the hire date
    pub fn terminate_employment(
        &self,
        request: &RequestContext,
        history_id: HistoryId,
        termination_date: NaiveDate,
    ) -> Result<()> {
        instrumented("employment_terminate", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(relation_ops::terminate_employment(
                &mut ctx,
                history_id,
                termination_date,
            )?)
        })
    }

    /// # Errors
    /// `MissingOwner` if the employee does not exist, `AlreadyExists` if the
    /// employee already holds a membership
    pub fn enroll_union_membership(
        &self,
        request: &RequestContext,
        employee_id: EmployeeId,
        is_member: bool,
    ) -> Result<MembershipId> {
        instrumented("union_enroll", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(relation_ops::enroll_union_membership(
                &mut ctx,
                employee_id,
                is_member,
            )?)
        })
    }

    /// # Errors
    /// `MissingOwner` if the membership does not exist
    pub fn grant_union_benefit(
        &self,
        request: &RequestContext,
        membership_id: MembershipId,
        granted_on: NaiveDate,
        benefit_type: Option<String>,
    ) -> Result<BenefitId> {
        instrumented("union_benefit_grant", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(relation_ops::grant_union_benefit(
                &mut ctx,
                membership_id,
                granted_on,
                benefit_type,
            )?)
        })
    }

    /// # Errors
    /// `NotFound` if the membership does not exist
    pub fn delete_union_membership(
        &self,
        request: &RequestContext,
        membership_id: MembershipId,
    ) -> Result<DeleteReport> {
        instrumented("union_membership_delete", request, || {
            let mut ctx = write(&self.ctx)?;
            Ok(relation_ops::delete_union_membership(
                &mut ctx,
                membership_id,
            )?)
        })
    }
}
