use chrono::NaiveDate;

use super::context::{DeleteReport, StoreContext};
use crate::errors::{PersonnelError, Result};
use crate::model::{
    BenefitId, DepartmentId, EmployeeDepartment, EmployeeId, EmploymentHistory, EntityKind,
    HistoryId, LinkId, MembershipId, UnionBenefit, UnionMembership,
};

fn require_employee(ctx: &StoreContext, kind: EntityKind, employee_id: EmployeeId) -> Result<()> {
    if ctx.employees.contains(employee_id) {
        Ok(())
    } else {
        Err(PersonnelError::MissingOwner {
            kind,
            owner_kind: EntityKind::Employee,
            owner_id: employee_id,
        })
    }
}

fn check_period(hire_date: NaiveDate, termination_date: Option<NaiveDate>) -> Result<()> {
    match termination_date {
        Some(termination_date) if termination_date < hire_date => {
            Err(PersonnelError::InvalidEmploymentPeriod {
                hire_date,
                termination_date,
            })
        }
        _ => Ok(()),
    }
}

// ===== Department links =====

/// Insert a link record under its own identity
///
/// Both owners must exist. The link identity is appended to the employee's
/// and the department's link collections.
///
/// # Errors
/// * `MissingOwner` - If the employee or the department does not exist
/// * `AlreadyExists` - If the link identity is taken
pub fn insert_department_link(ctx: &mut StoreContext, link: EmployeeDepartment) -> Result<()> {
    require_employee(ctx, EntityKind::DepartmentLink, link.employee_id)?;
    if !ctx.departments.contains(link.department_id) {
        return Err(PersonnelError::MissingOwner {
            kind: EntityKind::DepartmentLink,
            owner_kind: EntityKind::Department,
            owner_id: link.department_id,
        });
    }

    let (id, employee_id, department_id) = (link.id, link.employee_id, link.department_id);
    ctx.department_links.add(link)?;

    if let Some(employee) = ctx.employees.get_mut(employee_id) {
        employee.add_department_link_id(id);
    }
    if let Some(department) = ctx.departments.get_mut(department_id) {
        department.add_employee_link_id(id);
    }
    Ok(())
}

/// Link an employee to a department, returning the new link identity
///
/// # Errors
/// * `MissingOwner` - If the employee or the department does not exist
pub fn link_employee_to_department(
    ctx: &mut StoreContext,
    employee_id: EmployeeId,
    department_id: DepartmentId,
) -> Result<LinkId> {
    let id = ctx.department_links.peek_next_id();
    insert_department_link(ctx, EmployeeDepartment::new(id, employee_id, department_id))?;
    Ok(id)
}

// ===== Employment history =====

/// Insert an employment history record under its own identity
///
/// # Errors
/// * `MissingOwner` - If the employee does not exist
/// * `InvalidEmploymentPeriod` - If the termination date precedes the hire date
/// * `AlreadyExists` - If the record identity is taken
pub fn insert_employment_history(ctx: &mut StoreContext, record: EmploymentHistory) -> Result<()> {
    require_employee(ctx, EntityKind::EmploymentHistory, record.employee_id)?;
    check_period(record.hire_date, record.termination_date)?;

    let (id, employee_id) = (record.id, record.employee_id);
    ctx.employment_history.add(record)?;

    if let Some(employee) = ctx.employees.get_mut(employee_id) {
        employee.add_employment_history_id(id);
    }
    Ok(())
}

/// Record an employment period for an employee
///
/// # Errors
/// * `MissingOwner` - If the employee does not exist
/// * `InvalidEmploymentPeriod` - If `termination_date` precedes `hire_date`
pub fn record_employment(
    ctx: &mut StoreContext,
    employee_id: EmployeeId,
    hire_date: NaiveDate,
    termination_date: Option<NaiveDate>,
    position: Option<String>,
) -> Result<HistoryId> {
    let id = ctx.employment_history.peek_next_id();
    let record = EmploymentHistory {
        termination_date,
        position,
        ..EmploymentHistory::new(id, employee_id, hire_date)
    };
    insert_employment_history(ctx, record)?;
    Ok(id)
}

/// Close an employment period
///
/// # Errors
/// * `NotFound` - If the history record does not exist
/// * `InvalidEmploymentPeriod` - If `termination_date` precedes the hire date
pub fn terminate_employment(
    ctx: &mut StoreContext,
    history_id: HistoryId,
    termination_date: NaiveDate,
) -> Result<()> {
    let record = ctx
        .employment_history
        .get_mut(history_id)
        .ok_or_else(|| PersonnelError::not_found(EntityKind::EmploymentHistory, history_id))?;
    check_period(record.hire_date, Some(termination_date))?;
    record.termination_date = Some(termination_date);
    Ok(())
}

// ===== Union =====

/// Insert a union membership under its own identity
///
/// An employee holds at most one membership; a reference to a membership
/// that no longer exists does not count.
///
/// # Errors
/// * `MissingOwner` - If the employee does not exist
/// * `MembershipAlreadyExists` - If the employee already holds a membership
/// * `AlreadyExists` - If the membership identity is taken
pub fn insert_union_membership(ctx: &mut StoreContext, membership: UnionMembership) -> Result<()> {
    require_employee(ctx, EntityKind::UnionMembership, membership.employee_id)?;

    let held = ctx
        .employees
        .get(membership.employee_id)
        .and_then(|e| e.union_membership_id)
        .filter(|id| ctx.union_memberships.contains(*id));
    if let Some(membership_id) = held {
        return Err(PersonnelError::MembershipAlreadyExists {
            employee_id: membership.employee_id,
            membership_id,
        });
    }

    let (id, employee_id) = (membership.id, membership.employee_id);
    ctx.union_memberships.add(membership)?;

    if let Some(employee) = ctx.employees.get_mut(employee_id) {
        employee.union_membership_id = Some(id);
    }
    Ok(())
}

/// Enroll an employee in the union, returning the membership identity
///
/// # Errors
/// * `MissingOwner` - If the employee does not exist
/// * `MembershipAlreadyExists` - If the employee already holds a membership
pub fn enroll_union_membership(
    ctx: &mut StoreContext,
    employee_id: EmployeeId,
    is_member: bool,
) -> Result<MembershipId> {
    let id = ctx.union_memberships.peek_next_id();
    insert_union_membership(ctx, UnionMembership::new(id, employee_id, is_member))?;
    Ok(id)
}

/// Insert a union benefit under its own identity
///
/// # Errors
/// * `MissingOwner` - If the membership does not exist
/// * `AlreadyExists` - If the benefit identity is taken
pub fn insert_union_benefit(ctx: &mut StoreContext, benefit: UnionBenefit) -> Result<()> {
    if !ctx.union_memberships.contains(benefit.union_membership_id) {
        return Err(PersonnelError::MissingOwner {
            kind: EntityKind::UnionBenefit,
            owner_kind: EntityKind::UnionMembership,
            owner_id: benefit.union_membership_id,
        });
    }

    let (id, membership_id) = (benefit.id, benefit.union_membership_id);
    ctx.union_benefits.add(benefit)?;

    if let Some(membership) = ctx.union_memberships.get_mut(membership_id) {
        membership.add_benefit_id(id);
    }
    Ok(())
}

/// Grant a benefit through a membership, returning the benefit identity
///
/// # Errors
/// * `MissingOwner` - If the membership does not exist
pub fn grant_union_benefit(
    ctx: &mut StoreContext,
    membership_id: MembershipId,
    granted_on: NaiveDate,
    benefit_type: Option<String>,
) -> Result<BenefitId> {
    let id = ctx.union_benefits.peek_next_id();
    insert_union_benefit(
        ctx,
        UnionBenefit {
            id,
            union_membership_id: membership_id,
            granted_on,
            benefit_type,
        },
    )?;
    Ok(id)
}

/// Remove a union membership
///
/// The owning employee's reference is cleared. Benefits granted through the
/// membership stay in place and are counted as dangling.
///
/// # Errors
/// * `NotFound` - If the membership does not exist
pub fn delete_union_membership(
    ctx: &mut StoreContext,
    membership_id: MembershipId,
) -> Result<DeleteReport> {
    let dangling = ctx.dependents_of_membership(membership_id);
    let removed = ctx.union_memberships.delete(membership_id)?;

    if let Some(employee) = ctx.employees.get_mut(removed.employee_id) {
        if employee.union_membership_id == Some(membership_id) {
            employee.union_membership_id = None;
        }
    }

    Ok(DeleteReport {
        kind: EntityKind::UnionMembership,
        id: membership_id,
        dangling,
    })
}
