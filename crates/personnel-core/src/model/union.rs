use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BenefitId, EmployeeId, MembershipId};

/// Trade-union membership record of an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionMembership {
    pub id: MembershipId,
    pub employee_id: EmployeeId,
    pub is_member: bool,

    /// Benefits granted through this membership
    #[serde(default)]
    pub benefit_ids: Vec<BenefitId>,
}

impl UnionMembership {
    pub fn new(id: MembershipId, employee_id: EmployeeId, is_member: bool) -> Self {
        Self {
            id,
            employee_id,
            is_member,
            benefit_ids: Vec::new(),
        }
    }

    pub(crate) fn add_benefit_id(&mut self, benefit_id: BenefitId) {
        if !self.benefit_ids.contains(&benefit_id) {
            self.benefit_ids.push(benefit_id);
        }
    }
}

/// Benefit (e.g. a subsidized holiday voucher) granted by the union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionBenefit {
    pub id: BenefitId,
    pub union_membership_id: MembershipId,
    pub granted_on: NaiveDate,
    pub benefit_type: Option<String>,
}
