#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_department, create_employee, date, employee, link_all, new_context};
use personnel_core::ops::{department_ops, employee_ops, relation_ops};
use personnel_core::{Department, EntityKind, PersonnelError};

#[test]
fn test_create_then_read_round_trip() {
    let mut ctx = new_context();
    let mut input = employee("Ivanov", "Ivan")
        .with_patronymic("Ivanovich")
        .with_department("Sales")
        .with_workshop("No. 3")
        .with_position("Engineer");
    input.home_phone = Some("555-0101".into());
    input.children_count = Some(2);

    let id = create_employee(&mut ctx, input.clone());
    let stored = employee_ops::read_employee(&ctx, id).unwrap();

    let mut expected = input;
    expected.id = id;
    assert_eq!(stored, &expected);
}

#[test]
fn test_identities_are_never_reused() {
    let mut ctx = new_context();
    let a = create_employee(&mut ctx, employee("A", "A"));
    let b = create_employee(&mut ctx, employee("B", "B"));
    employee_ops::delete_employee(&mut ctx, b).unwrap();
    employee_ops::delete_employee(&mut ctx, a).unwrap();

    let c = create_employee(&mut ctx, employee("C", "C"));
    assert!(c > b);
}

#[test]
fn test_update_preserves_relationship_collections() {
    let mut ctx = new_context();
    let d1 = create_department(&mut ctx, "Sales");
    let d2 = create_department(&mut ctx, "Finance");
    let e = create_employee(&mut ctx, employee("Ivanov", "Ivan"));
    link_all(&mut ctx, e, &[d1, d2]);
    relation_ops::record_employment(&mut ctx, e, date(2012, 9, 1), None, None).unwrap();
    let membership = relation_ops::enroll_union_membership(&mut ctx, e, true).unwrap();
    let before = employee_ops::read_employee(&ctx, e).unwrap().clone();

    employee_ops::update_employee(&mut ctx, e, employee("Ivanova", "Irina")).unwrap();

    let after = employee_ops::read_employee(&ctx, e).unwrap();
    assert_eq!(after.last_name, "Ivanova");
    assert_eq!(after.department_link_ids, before.department_link_ids);
    assert_eq!(after.employment_history_ids, before.employment_history_ids);
    assert_eq!(after.union_membership_id, Some(membership));
    assert_eq!(ctx.linked_departments(e).len(), 2);
}

#[test]
fn test_department_update_preserves_employee_links() {
    let mut ctx = new_context();
    let d = create_department(&mut ctx, "Sales");
    let e = create_employee(&mut ctx, employee("Ivanov", "Ivan"));
    link_all(&mut ctx, e, &[d]);

    department_ops::update_department(&mut ctx, d, Department::new(0, "Sales & Marketing")).unwrap();

    let stored = department_ops::read_department(&ctx, d).unwrap();
    assert_eq!(stored.name, "Sales & Marketing");
    assert_eq!(ctx.department_employee_count(stored), 1);
}

#[test]
fn test_update_moves_record_to_end_of_list() {
    let mut ctx = new_context();
    let a = create_employee(&mut ctx, employee("A", "A"));
    let b = create_employee(&mut ctx, employee("B", "B"));

    employee_ops::update_employee(&mut ctx, a, employee("A2", "A")).unwrap();

    let order: Vec<_> = employee_ops::list_employees(&ctx).iter().map(|e| e.id).collect();
    assert_eq!(order, vec![b, a]);
}

#[test]
fn test_delete_nonexistent_leaves_store_unchanged() {
    let mut ctx = new_context();
    create_employee(&mut ctx, employee("A", "A"));
    create_department(&mut ctx, "Sales");

    let err = employee_ops::delete_employee(&mut ctx, 77).unwrap_err();
    assert_eq!(err, PersonnelError::not_found(EntityKind::Employee, 77));
    assert_eq!(employee_ops::list_employees(&ctx).len(), 1);

    let err = department_ops::delete_department(&mut ctx, 77).unwrap_err();
    assert!(matches!(err, PersonnelError::NotFound { kind: EntityKind::Department, .. }));
    assert_eq!(department_ops::list_departments(&ctx).len(), 1);
}

#[test]
fn test_delete_employee_reports_dangling_dependents() {
    let mut ctx = new_context();
    let d = create_department(&mut ctx, "Sales");
    let e = create_employee(&mut ctx, employee("Ivanov", "Ivan"));
    link_all(&mut ctx, e, &[d]);
    relation_ops::record_employment(&mut ctx, e, date(2012, 9, 1), None, None).unwrap();
    relation_ops::enroll_union_membership(&mut ctx, e, true).unwrap();

    let report = employee_ops::delete_employee(&mut ctx, e).unwrap();
    assert_eq!(report.dangling.department_links, 1);
    assert_eq!(report.dangling.employment_history, 1);
    assert_eq!(report.dangling.union_memberships, 1);
    assert_eq!(report.dangling.total(), 3);

    // no cascade
    assert_eq!(ctx.department_links().len(), 1);
    assert_eq!(ctx.employment_history().len(), 1);
    assert_eq!(ctx.linked_departments(e).len(), 0);
}

#[test]
fn test_delete_department_reports_links() {
    let mut ctx = new_context();
    let d = create_department(&mut ctx, "Sales");
    for name in ["A", "B"] {
        let e = create_employee(&mut ctx, employee(name, name));
        link_all(&mut ctx, e, &[d]);
    }

    let report = department_ops::delete_department(&mut ctx, d).unwrap();
    assert_eq!(report.kind, EntityKind::Department);
    assert_eq!(report.dangling.department_links, 2);
}
