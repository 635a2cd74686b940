use serde::{Deserialize, Serialize};

use super::{DepartmentId, EmployeeId, LinkId};

/// Membership of an employee in a department (junction record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDepartment {
    pub id: LinkId,
    pub employee_id: EmployeeId,
    pub department_id: DepartmentId,
}

impl EmployeeDepartment {
    pub fn new(id: LinkId, employee_id: EmployeeId, department_id: DepartmentId) -> Self {
        Self {
            id,
            employee_id,
            department_id,
        }
    }
}
