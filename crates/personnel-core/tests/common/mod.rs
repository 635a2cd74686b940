use chrono::NaiveDate;
use personnel_core::model::{Department, Employee, EmployeeId};
use personnel_core::ops::{department_ops, employee_ops, relation_ops};
use personnel_core::StoreContext;

/// Calendar date shorthand
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a new empty StoreContext for testing
#[allow(dead_code)]
pub fn new_context() -> StoreContext {
    StoreContext::new()
}

/// Employee with fixed birth and hire dates, no optional fields
#[allow(dead_code)]
pub fn employee(last: &str, first: &str) -> Employee {
    Employee::new(0, last, first, date(1985, 6, 15), date(2012, 9, 1))
}

/// Create an employee through the CRUD operation and return its identity
#[allow(dead_code)]
pub fn create_employee(ctx: &mut StoreContext, employee: Employee) -> EmployeeId {
    employee_ops::create_employee(ctx, employee).unwrap()
}

/// Create a department by name and return its identity
#[allow(dead_code)]
pub fn create_department(ctx: &mut StoreContext, name: &str) -> u32 {
    department_ops::create_department(ctx, Department::new(0, name)).unwrap()
}

/// Link an employee to every listed department
#[allow(dead_code)]
pub fn link_all(ctx: &mut StoreContext, employee_id: EmployeeId, department_ids: &[u32]) {
    for department_id in department_ids {
        relation_ops::link_employee_to_department(ctx, employee_id, *department_id).unwrap();
    }
}
