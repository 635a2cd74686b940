//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import. Every record carries its own
//! identity so links between records can be written by hand.

use chrono::NaiveDate;
use personnel_core::model::{
    Department, Employee, EmployeeDepartment, EmploymentHistory, UnionBenefit, UnionMembership,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Organization metadata
    pub organization: SeedOrganization,

    #[serde(default)]
    pub departments: Vec<SeedDepartment>,

    #[serde(default)]
    pub employees: Vec<SeedEmployee>,

    /// Employee-Department memberships
    #[serde(default)]
    pub department_links: Vec<SeedDepartmentLink>,

    #[serde(default)]
    pub employment_history: Vec<SeedEmploymentHistory>,

    #[serde(default)]
    pub union_memberships: Vec<SeedUnionMembership>,

    #[serde(default)]
    pub union_benefits: Vec<SeedUnionBenefit>,
}

/// Organization metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOrganization {
    pub name: String,
}

/// Department definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDepartment {
    pub id: u32,
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: Option<String>,

    /// Employee heading the department
    #[serde(default)]
    pub manager_id: Option<u32>,
}

/// Employee definition in seed
///
/// Dates are written as `YYYY-MM-DD`. Blank optional text is read as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEmployee {
    pub id: u32,
    pub last_name: String,
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub patronymic: Option<String>,

    pub date_of_birth: NaiveDate,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub gender: Option<String>,

    pub hire_date: NaiveDate,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub workshop: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub department: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub position: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub home_address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub work_phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub home_phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub marital_status: Option<String>,

    #[serde(default)]
    pub family_members_count: Option<u32>,

    #[serde(default)]
    pub children_count: Option<u32>,
}

/// Link definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDepartmentLink {
    pub id: u32,
    pub employee: u32,
    pub department: u32,
}

/// Employment period in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEmploymentHistory {
    pub id: u32,
    pub employee: u32,
    pub hire_date: NaiveDate,

    #[serde(default)]
    pub termination_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub position: Option<String>,
}

/// Union membership in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUnionMembership {
    pub id: u32,
    pub employee: u32,

    #[serde(default = "default_is_member")]
    pub is_member: bool,
}

/// Union benefit in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUnionBenefit {
    pub id: u32,
    pub membership: u32,
    pub granted_on: NaiveDate,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub benefit_type: Option<String>,
}

fn default_is_member() -> bool {
    true
}

/// Trim optional text and treat blank values as absent
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

impl SeedDepartment {
    pub fn to_model(&self) -> Department {
        Department {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            manager_id: self.manager_id,
            employee_link_ids: Vec::new(),
        }
    }
}

impl SeedEmployee {
    pub fn to_model(&self) -> Employee {
        Employee {
            patronymic: self.patronymic.clone(),
            gender: self.gender.clone(),
            workshop: self.workshop.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            home_address: self.home_address.clone(),
            work_phone: self.work_phone.clone(),
            home_phone: self.home_phone.clone(),
            marital_status: self.marital_status.clone(),
            family_members_count: self.family_members_count,
            children_count: self.children_count,
            ..Employee::new(
                self.id,
                self.last_name.clone(),
                self.first_name.clone(),
                self.date_of_birth,
                self.hire_date,
            )
        }
    }
}

impl SeedDepartmentLink {
    pub fn to_model(&self) -> EmployeeDepartment {
        EmployeeDepartment::new(self.id, self.employee, self.department)
    }
}

impl SeedEmploymentHistory {
    pub fn to_model(&self) -> EmploymentHistory {
        EmploymentHistory {
            termination_date: self.termination_date,
            position: self.position.clone(),
            ..EmploymentHistory::new(self.id, self.employee, self.hire_date)
        }
    }
}

impl SeedUnionMembership {
    pub fn to_model(&self) -> UnionMembership {
        UnionMembership::new(self.id, self.employee, self.is_member)
    }
}

impl SeedUnionBenefit {
    pub fn to_model(&self) -> UnionBenefit {
        UnionBenefit {
            id: self.id,
            union_membership_id: self.membership,
            granted_on: self.granted_on,
            benefit_type: self.benefit_type.clone(),
        }
    }
}
