use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, HistoryId, LinkId, MembershipId};

/// Average length of a calendar year in days, used for fractional ages
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Employee of the organization
///
/// The `workshop` and `department` fields are free-text labels kept on the
/// record itself. They are not tied to the `Department` entities; the
/// relational membership lives in `department_link_ids`. Read them through
/// `department_label()` / `workshop_label()` and
/// `StoreContext::linked_departments()` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Registration number, unique among employees
    pub id: EmployeeId,

    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,

    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,

    /// Date the employee joined the organization
    pub hire_date: NaiveDate,

    /// Workshop label (denormalized)
    pub workshop: Option<String>,

    /// Department label (denormalized)
    pub department: Option<String>,

    /// Current job title
    pub position: Option<String>,

    pub home_address: Option<String>,
    pub work_phone: Option<String>,
    pub home_phone: Option<String>,
    pub marital_status: Option<String>,
    pub family_members_count: Option<u32>,
    pub children_count: Option<u32>,

    /// Employee-Department link records owned by this employee
    #[serde(default)]
    pub department_link_ids: Vec<LinkId>,

    /// Employment-History records owned by this employee
    #[serde(default)]
    pub employment_history_ids: Vec<HistoryId>,

    /// Union-Membership record, if any
    #[serde(default)]
    pub union_membership_id: Option<MembershipId>,
}

impl Employee {
    /// Create an employee with the required fields; every optional field is
    /// empty and every relationship collection starts empty
    pub fn new(
        id: EmployeeId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: NaiveDate,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            id,
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
            department_link_ids: Vec::new(),
            employment_history_ids: Vec::new(),
            union_membership_id: None,
        }
    }

    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_workshop(mut self, workshop: impl Into<String>) -> Self {
        self.workshop = Some(workshop.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Denormalized department label
    pub fn department_label(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Denormalized workshop label
    pub fn workshop_label(&self) -> Option<&str> {
        self.workshop.as_deref()
    }

    /// Patronymic, treating a missing one as empty
    pub fn patronymic_or_empty(&self) -> &str {
        self.patronymic.as_deref().unwrap_or("")
    }

    /// Display name
    ///
    /// "Last First Patronymic" when a patronymic is present, otherwise
    /// "First Last".
    pub fn full_name(&self) -> String {
        match self.patronymic.as_deref() {
            Some(p) if !p.is_empty() => format!("{} {} {}", self.last_name, self.first_name, p),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Age in fractional years as of `today`
    pub fn age_in_years(&self, today: NaiveDate) -> f64 {
        (today - self.date_of_birth).num_days() as f64 / DAYS_PER_YEAR
    }

    /// Days elapsed since hire as of `today`
    pub fn seniority_days(&self, today: NaiveDate) -> i64 {
        (today - self.hire_date).num_days()
    }

    /// Take over the relationship collections of the record this one replaces
    pub fn carry_relations_from(&mut self, previous: &Employee) {
        self.department_link_ids = previous.department_link_ids.clone();
        self.employment_history_ids = previous.employment_history_ids.clone();
        self.union_membership_id = previous.union_membership_id;
    }

    pub(crate) fn add_department_link_id(&mut self, link_id: LinkId) {
        if !self.department_link_ids.contains(&link_id) {
            self.department_link_ids.push(link_id);
        }
    }

    pub(crate) fn add_employment_history_id(&mut self, history_id: HistoryId) {
        if !self.employment_history_ids.contains(&history_id) {
            self.employment_history_ids.push(history_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_name_with_patronymic() {
        let e = Employee::new(1, "Ivanov", "Petr", date(1980, 1, 1), date(2000, 1, 1))
            .with_patronymic("Sergeevich");
        assert_eq!(e.full_name(), "Ivanov Petr Sergeevich");
    }

    #[test]
    fn test_full_name_without_patronymic() {
        let e = Employee::new(1, "Smith", "Anna", date(1980, 1, 1), date(2000, 1, 1));
        assert_eq!(e.full_name(), "Anna Smith");

        let empty = e.clone().with_patronymic("");
        assert_eq!(empty.full_name(), "Anna Smith");
    }

    #[test]
    fn test_age_in_years_is_fractional() {
        let e = Employee::new(1, "A", "B", date(2000, 1, 1), date(2020, 1, 1));
        let age = e.age_in_years(date(2010, 7, 2));
        assert!(age > 10.4 && age < 10.6, "age was {}", age);
    }

    #[test]
    fn test_carry_relations_from() {
        let mut old = Employee::new(5, "A", "B", date(1990, 1, 1), date(2015, 1, 1));
        old.add_department_link_id(3);
        old.add_department_link_id(3);
        old.add_employment_history_id(9);
        old.union_membership_id = Some(2);

        let mut replacement = Employee::new(5, "C", "D", date(1990, 1, 1), date(2015, 1, 1));
        replacement.carry_relations_from(&old);

        assert_eq!(replacement.department_link_ids, vec![3]);
        assert_eq!(replacement.employment_history_ids, vec![9]);
        assert_eq!(replacement.union_membership_id, Some(2));
        assert_eq!(replacement.last_name, "C");
    }
}
