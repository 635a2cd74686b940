//! Employee analytics
//!
//! Six reporting queries over a `StoreContext`. Date-relative queries take
//! the reference date explicitly; callers obtain it from a `Clock`.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Employee, EmployeeId};
use crate::ops::StoreContext;

/// Number of employees returned by the seniority ranking
pub const TOP_SENIORITY_LIMIT: usize = 5;

/// Look-back window of the union benefit report, inclusive at both ends
pub const BENEFIT_WINDOW_DAYS: i64 = 365;

/// One closed employment period, flattened with its employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationRecord {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub workshop: Option<String>,
    pub department: Option<String>,

    /// Position held during the terminated period
    pub position: Option<String>,
}

/// One benefit granted within the report window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionBenefitRecord {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub benefit_type: Option<String>,
}

/// Employees whose department label equals `department` exactly
///
/// Matching is case-sensitive. An empty name matches nothing, including
/// employees with an empty label.
pub fn employees_by_department<'a>(ctx: &'a StoreContext, department: &str) -> Vec<&'a Employee> {
    if department.is_empty() {
        return Vec::new();
    }
    ctx.employees()
        .iter()
        .filter(|e| e.department_label() == Some(department))
        .collect()
}

/// Employees holding two or more department links that still resolve
///
/// Ordered by last name, first name, then patronymic (missing sorts as
/// empty), with identity as the final tiebreaker.
pub fn employees_in_multiple_departments(ctx: &StoreContext) -> Vec<&Employee> {
    let mut result: Vec<&Employee> = ctx
        .employees()
        .iter()
        .filter(|e| ctx.resolved_department_links(e).len() >= 2)
        .collect();

    result.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
            .then_with(|| a.patronymic_or_empty().cmp(b.patronymic_or_empty()))
            .then_with(|| a.id.cmp(&b.id))
    });
    result
}

/// One row per terminated employment history record, in store order
///
/// Records whose employee no longer exists are skipped.
pub fn termination_archive(ctx: &StoreContext) -> Vec<TerminationRecord> {
    ctx.employment_history()
        .iter()
        .filter(|h| h.is_terminated())
        .filter_map(|h| {
            let employee = ctx.employees().get(h.employee_id)?;
            Some(TerminationRecord {
                employee_id: employee.id,
                full_name: employee.full_name(),
                date_of_birth: employee.date_of_birth,
                workshop: employee.workshop.clone(),
                department: employee.department.clone(),
                position: h.position.clone(),
            })
        })
        .collect()
}

/// Mean age in fractional years per department label, ordered by label
///
/// Employees without a label are left out; a label appears only when at
/// least one employee carries it.
pub fn average_age_by_department(ctx: &StoreContext, today: NaiveDate) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for employee in ctx.employees().iter() {
        let Some(label) = employee.department_label() else {
            continue;
        };
        let entry = sums.entry(label.to_string()).or_insert((0.0, 0));
        entry.0 += employee.age_in_years(today);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(label, (total, count))| (label, total / count as f64))
        .collect()
}

/// Benefits granted in `[today - 365 days, today]`, resolved to their employee
///
/// Benefits whose membership or employee no longer exists are skipped.
pub fn union_benefits_last_year(ctx: &StoreContext, today: NaiveDate) -> Vec<UnionBenefitRecord> {
    // No lower bound when the window would start before the earliest date
    let window_start = today.checked_sub_signed(Duration::days(BENEFIT_WINDOW_DAYS));

    ctx.union_benefits()
        .iter()
        .filter(|b| window_start.map_or(true, |start| b.granted_on >= start))
        .filter(|b| b.granted_on <= today)
        .filter_map(|b| {
            let membership = ctx.union_memberships().get(b.union_membership_id)?;
            let employee = ctx.employees().get(membership.employee_id)?;
            Some(UnionBenefitRecord {
                employee_id: employee.id,
                full_name: employee.full_name(),
                benefit_type: b.benefit_type.clone(),
            })
        })
        .collect()
}

/// The `limit` most senior employees, earliest hire first
///
/// Equal hire dates are ordered by identity.
pub fn top_employees_by_seniority(ctx: &StoreContext, limit: usize) -> Vec<&Employee> {
    let mut result: Vec<&Employee> = ctx.employees().iter().collect();
    result.sort_by(|a, b| a.hire_date.cmp(&b.hire_date).then_with(|| a.id.cmp(&b.id)));
    result.truncate(limit);
    result
}

pub fn top_five_by_seniority(ctx: &StoreContext) -> Vec<&Employee> {
    top_employees_by_seniority(ctx, TOP_SENIORITY_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_yields_empty_results() {
        let ctx = StoreContext::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert!(employees_by_department(&ctx, "Sales").is_empty());
        assert!(employees_in_multiple_departments(&ctx).is_empty());
        assert!(termination_archive(&ctx).is_empty());
        assert!(average_age_by_department(&ctx, today).is_empty());
        assert!(union_benefits_last_year(&ctx, today).is_empty());
        assert!(top_five_by_seniority(&ctx).is_empty());
    }
}
