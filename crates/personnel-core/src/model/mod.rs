pub mod department;
pub mod employee;
pub mod history;
pub mod link;
pub mod union;

pub use department::Department;
pub use employee::Employee;
pub use history::EmploymentHistory;
pub use link::EmployeeDepartment;
pub use union::{UnionBenefit, UnionMembership};

use serde::{Deserialize, Serialize};

/// Identity of any stored entity; unique within its kind, assigned from 1
pub type EntityId = u32;

pub type EmployeeId = EntityId;
pub type DepartmentId = EntityId;
pub type LinkId = EntityId;
pub type HistoryId = EntityId;
pub type MembershipId = EntityId;
pub type BenefitId = EntityId;

/// The entity kinds held by a `StoreContext`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Employee,
    Department,
    DepartmentLink,
    EmploymentHistory,
    UnionMembership,
    UnionBenefit,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Employee => "employee",
            EntityKind::Department => "department",
            EntityKind::DepartmentLink => "department_link",
            EntityKind::EmploymentHistory => "employment_history",
            EntityKind::UnionMembership => "union_membership",
            EntityKind::UnionBenefit => "union_benefit",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
