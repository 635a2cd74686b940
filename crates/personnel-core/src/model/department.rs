use serde::{Deserialize, Serialize};

use super::{DepartmentId, EmployeeId, LinkId};

/// Organizational department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,

    /// Employee who manages the department; not checked against the store
    pub manager_id: Option<EmployeeId>,

    /// Employee-Department link records pointing at this department
    #[serde(default)]
    pub employee_link_ids: Vec<LinkId>,
}

impl Department {
    pub fn new(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            manager_id: None,
            employee_link_ids: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_manager(mut self, manager_id: EmployeeId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Take over the link list of the record this one replaces
    pub fn carry_relations_from(&mut self, previous: &Department) {
        self.employee_link_ids = previous.employee_link_ids.clone();
    }

    pub(crate) fn add_employee_link_id(&mut self, link_id: LinkId) {
        if !self.employee_link_ids.contains(&link_id) {
            self.employee_link_ids.push(link_id);
        }
    }
}
