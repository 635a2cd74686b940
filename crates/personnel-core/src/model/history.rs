use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, HistoryId};

/// One employment period of an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentHistory {
    pub id: HistoryId,
    pub employee_id: EmployeeId,
    pub hire_date: NaiveDate,

    /// `None` while the period is ongoing
    pub termination_date: Option<NaiveDate>,

    /// Job title held during the period
    pub position: Option<String>,
}

impl EmploymentHistory {
    pub fn new(id: HistoryId, employee_id: EmployeeId, hire_date: NaiveDate) -> Self {
        Self {
            id,
            employee_id,
            hire_date,
            termination_date: None,
            position: None,
        }
    }

    /// Whether the period has ended (part of the termination archive)
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }
}
