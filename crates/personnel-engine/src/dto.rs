//! External record shapes
//!
//! Read DTOs carry derived counts instead of relationship collections.
//! Create/update DTOs carry no identity and no relationships; the store
//! assigns the former and update carries the latter forward.

use chrono::NaiveDate;
use personnel_core::model::{DepartmentId, EmployeeId};
use personnel_core::{Department, Employee, StoreContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: EmployeeId,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub hire_date: NaiveDate,
    pub workshop: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub home_address: Option<String>,
    pub work_phone: Option<String>,
    pub home_phone: Option<String>,
    pub marital_status: Option<String>,
    pub family_members_count: Option<u32>,
    pub children_count: Option<u32>,

    /// Employment history records that still resolve
    pub employment_history_count: usize,
}

impl EmployeeDto {
    pub fn from_model(employee: &Employee, ctx: &StoreContext) -> Self {
        Self {
            id: employee.id,
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            patronymic: employee.patronymic.clone(),
            full_name: employee.full_name(),
            date_of_birth: employee.date_of_birth,
            gender: employee.gender.clone(),
            hire_date: employee.hire_date,
            workshop: employee.workshop.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            home_address: employee.home_address.clone(),
            work_phone: employee.work_phone.clone(),
            home_phone: employee.home_phone.clone(),
            marital_status: employee.marital_status.clone(),
            family_members_count: employee.family_members_count,
            children_count: employee.children_count,
            employment_history_count: ctx.employment_history_of(employee).len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreateUpdateDto {
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub patronymic: Option<String>,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Option<String>,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub workshop: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub home_address: Option<String>,
    #[serde(default)]
    pub work_phone: Option<String>,
    #[serde(default)]
    pub home_phone: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub family_members_count: Option<u32>,
    #[serde(default)]
    pub children_count: Option<u32>,
}

impl EmployeeCreateUpdateDto {
    /// Minimal input with every optional field empty
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: NaiveDate,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            patronymic: None,
            date_of_birth,
            gender: None,
            hire_date,
            workshop: None,
            department: None,
            position: None,
            home_address: None,
            work_phone: None,
            home_phone: None,
            marital_status: None,
            family_members_count: None,
            children_count: None,
        }
    }

    /// Build a model with empty relationship collections
    pub fn into_model(self, id: EmployeeId) -> Employee {
        Employee {
            patronymic: self.patronymic,
            gender: self.gender,
            workshop: self.workshop,
            department: self.department,
            position: self.position,
            home_address: self.home_address,
            work_phone: self.work_phone,
            home_phone: self.home_phone,
            marital_status: self.marital_status,
            family_members_count: self.family_members_count,
            children_count: self.children_count,
            ..Employee::new(
                id,
                self.last_name,
                self.first_name,
                self.date_of_birth,
                self.hire_date,
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<EmployeeId>,

    /// Employee links that still resolve
    pub employee_count: usize,
}

impl DepartmentDto {
    pub fn from_model(department: &Department, ctx: &StoreContext) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            description: department.description.clone(),
            manager_id: department.manager_id,
            employee_count: ctx.department_employee_count(department),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCreateUpdateDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
}

impl DepartmentCreateUpdateDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            manager_id: None,
        }
    }

    pub fn into_model(self, id: DepartmentId) -> Department {
        Department {
            description: self.description,
            manager_id: self.manager_id,
            ..Department::new(id, self.name)
        }
    }
}
