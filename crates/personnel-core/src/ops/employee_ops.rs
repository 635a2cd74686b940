use super::context::{DeleteReport, StoreContext};
use crate::errors::{PersonnelError, Result};
use crate::model::{Employee, EmployeeId, EntityKind};

/// Create a new Employee
///
/// The identity carried by `employee` is ignored: a fresh one is taken from
/// the store counter. Relationship collections are cleared, since a new
/// employee owns no records yet.
///
/// # Errors
/// * `AlreadyExists` - only if the counter collides with an explicitly inserted identity
pub fn create_employee(ctx: &mut StoreContext, mut employee: Employee) -> Result<EmployeeId> {
    let id = ctx.employees.next_id();
    employee.id = id;
    employee.department_link_ids.clear();
    employee.employment_history_ids.clear();
    employee.union_membership_id = None;

    ctx.employees.add(employee)?;
    Ok(id)
}

/// Read an Employee by ID
pub fn read_employee(ctx: &StoreContext, id: EmployeeId) -> Option<&Employee> {
    ctx.employees.get(id)
}

/// All Employees in store order
pub fn list_employees(ctx: &StoreContext) -> &[Employee] {
    ctx.employees.get_all()
}

/// Replace an Employee, keeping its relationship collections
///
/// `replacement` takes the identity `id` and inherits department links,
/// employment history and union membership from the stored record.
///
/// # Errors
/// * `NotFound` - If no employee has identity `id`; nothing is written
pub fn update_employee(
    ctx: &mut StoreContext,
    id: EmployeeId,
    mut replacement: Employee,
) -> Result<()> {
    let previous = ctx
        .employees
        .get(id)
        .ok_or_else(|| PersonnelError::not_found(EntityKind::Employee, id))?;

    replacement.id = id;
    replacement.carry_relations_from(previous);

    ctx.employees.update(replacement)
}

/// Delete an Employee without touching its dependents
///
/// # Errors
/// * `NotFound` - If no employee has identity `id`; the store is unchanged
pub fn delete_employee(ctx: &mut StoreContext, id: EmployeeId) -> Result<DeleteReport> {
    if !ctx.employees.contains(id) {
        return Err(PersonnelError::not_found(EntityKind::Employee, id));
    }
    let dangling = ctx.dependents_of_employee(id);
    ctx.employees.delete(id)?;

    Ok(DeleteReport {
        kind: EntityKind::Employee,
        id,
        dangling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(last: &str) -> Employee {
        Employee::new(
            0,
            last,
            "Test",
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut ctx = StoreContext::new();
        let a = create_employee(&mut ctx, sample("A")).unwrap();
        let b = create_employee(&mut ctx, sample("B")).unwrap();

        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(read_employee(&ctx, b).unwrap().last_name, "B");
    }

    #[test]
    fn test_create_clears_relationship_collections() {
        let mut ctx = StoreContext::new();
        let mut e = sample("A");
        e.department_link_ids = vec![4, 5];
        e.union_membership_id = Some(1);

        let id = create_employee(&mut ctx, e).unwrap();
        let stored = read_employee(&ctx, id).unwrap();
        assert!(stored.department_link_ids.is_empty());
        assert!(stored.union_membership_id.is_none());
    }

    #[test]
    fn test_update_missing_writes_nothing() {
        let mut ctx = StoreContext::new();
        create_employee(&mut ctx, sample("A")).unwrap();

        let result = update_employee(&mut ctx, 42, sample("Ghost"));
        assert!(matches!(result, Err(PersonnelError::NotFound { id: 42, .. })));
        assert_eq!(list_employees(&ctx).len(), 1);
    }

    #[test]
    fn test_delete_returns_report() {
        let mut ctx = StoreContext::new();
        let id = create_employee(&mut ctx, sample("A")).unwrap();

        let report = delete_employee(&mut ctx, id).unwrap();
        assert_eq!(report.kind, EntityKind::Employee);
        assert!(report.dangling.is_empty());
        assert!(read_employee(&ctx, id).is_none());
    }
}
