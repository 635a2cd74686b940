use serde::Serialize;

use crate::model::{
    Department, DepartmentId, Employee, EmployeeDepartment, EmployeeId, EmploymentHistory,
    EntityId, EntityKind, MembershipId, UnionBenefit, UnionMembership,
};

use super::store::EntityStore;

/// Every store of the personnel ledger, owned together
///
/// Services receive a context (or a shared handle to one) at construction,
/// so separate contexts are fully isolated from each other.
#[derive(Debug, Clone, Default)]
pub struct StoreContext {
    pub(crate) employees: EntityStore<Employee>,
    pub(crate) departments: EntityStore<Department>,
    pub(crate) department_links: EntityStore<EmployeeDepartment>,
    pub(crate) employment_history: EntityStore<EmploymentHistory>,
    pub(crate) union_memberships: EntityStore<UnionMembership>,
    pub(crate) union_benefits: EntityStore<UnionBenefit>,
}

impl StoreContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &EntityStore<Employee> {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut EntityStore<Employee> {
        &mut self.employees
    }

    pub fn departments(&self) -> &EntityStore<Department> {
        &self.departments
    }

    pub fn departments_mut(&mut self) -> &mut EntityStore<Department> {
        &mut self.departments
    }

    pub fn department_links(&self) -> &EntityStore<EmployeeDepartment> {
        &self.department_links
    }

    pub fn employment_history(&self) -> &EntityStore<EmploymentHistory> {
        &self.employment_history
    }

    pub fn union_memberships(&self) -> &EntityStore<UnionMembership> {
        &self.union_memberships
    }

    pub fn union_benefits(&self) -> &EntityStore<UnionBenefit> {
        &self.union_benefits
    }

    /// Departments the employee is linked to through link records
    ///
    /// Links or departments that no longer exist are skipped. This is the
    /// relational view; the free-text label is `Employee::department_label()`.
    pub fn linked_departments(&self, employee_id: EmployeeId) -> Vec<&Department> {
        let Some(employee) = self.employees.get(employee_id) else {
            return Vec::new();
        };
        employee
            .department_link_ids
            .iter()
            .filter_map(|link_id| self.department_links.get(*link_id))
            .filter_map(|link| self.departments.get(link.department_id))
            .collect()
    }

    /// Link records of an employee that still resolve
    pub fn resolved_department_links(&self, employee: &Employee) -> Vec<&EmployeeDepartment> {
        employee
            .department_link_ids
            .iter()
            .filter_map(|link_id| self.department_links.get(*link_id))
            .collect()
    }

    /// Derived employee count of a department (links that still resolve)
    pub fn department_employee_count(&self, department: &Department) -> usize {
        department
            .employee_link_ids
            .iter()
            .filter(|link_id| self.department_links.contains(**link_id))
            .count()
    }

    /// Employment history records of an employee that still resolve
    pub fn employment_history_of(&self, employee: &Employee) -> Vec<&EmploymentHistory> {
        employee
            .employment_history_ids
            .iter()
            .filter_map(|id| self.employment_history.get(*id))
            .collect()
    }

    /// Union membership of an employee, if it still resolves
    pub fn union_membership_of(&self, employee: &Employee) -> Option<&UnionMembership> {
        employee
            .union_membership_id
            .and_then(|id| self.union_memberships.get(id))
    }

    /// Records that would point at a missing employee once it is deleted
    pub fn dependents_of_employee(&self, employee_id: EmployeeId) -> DanglingDependents {
        DanglingDependents {
            department_links: self
                .department_links
                .iter()
                .filter(|l| l.employee_id == employee_id)
                .count(),
            employment_history: self
                .employment_history
                .iter()
                .filter(|h| h.employee_id == employee_id)
                .count(),
            union_memberships: self
                .union_memberships
                .iter()
                .filter(|m| m.employee_id == employee_id)
                .count(),
            union_benefits: 0,
        }
    }

    /// Records that would point at a missing department once it is deleted
    pub fn dependents_of_department(&self, department_id: DepartmentId) -> DanglingDependents {
        DanglingDependents {
            department_links: self
                .department_links
                .iter()
                .filter(|l| l.department_id == department_id)
                .count(),
            ..DanglingDependents::default()
        }
    }

    /// Records that would point at a missing membership once it is deleted
    pub fn dependents_of_membership(&self, membership_id: MembershipId) -> DanglingDependents {
        DanglingDependents {
            union_benefits: self
                .union_benefits
                .iter()
                .filter(|b| b.union_membership_id == membership_id)
                .count(),
            ..DanglingDependents::default()
        }
    }
}

/// Count of child records left pointing at a deleted owner, per child kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DanglingDependents {
    pub department_links: usize,
    pub employment_history: usize,
    pub union_memberships: usize,
    pub union_benefits: usize,
}

impl DanglingDependents {
    pub fn total(&self) -> usize {
        self.department_links
            + self.employment_history
            + self.union_memberships
            + self.union_benefits
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Outcome of a successful delete
///
/// Deletes never cascade. The report tells the caller how many dependents
/// are now dangling so a stricter caller can clean them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub kind: EntityKind,
    pub id: EntityId,
    pub dangling: DanglingDependents,
}
