//! Seed parser with validation
//!
//! Parses YAML and validates schema version, identity uniqueness, and referential integrity

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Collect identities of one record kind, rejecting duplicates and zero
fn unique_ids<I>(kind: &str, ids: I) -> Result<HashSet<u32>>
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if id == 0 {
            return Err(seed_validation(&format!(
                "Invalid {} id 0: identities start at 1",
                kind
            )));
        }
        if !seen.insert(id) {
            return Err(seed_validation(&format!("Duplicate {} id {}", kind, id)));
        }
    }
    Ok(seen)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    if seed.organization.name.trim().is_empty() {
        return Err(seed_validation("Organization name must not be empty"));
    }

    let department_ids = unique_ids("department", seed.departments.iter().map(|d| d.id))?;
    let employee_ids = unique_ids("employee", seed.employees.iter().map(|e| e.id))?;
    unique_ids("department link", seed.department_links.iter().map(|l| l.id))?;
    unique_ids("employment history", seed.employment_history.iter().map(|h| h.id))?;
    let membership_ids = unique_ids("union membership", seed.union_memberships.iter().map(|m| m.id))?;
    unique_ids("union benefit", seed.union_benefits.iter().map(|b| b.id))?;

    for department in &seed.departments {
        if department.name.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Department {} has an empty name",
                department.id
            )));
        }
        if let Some(manager_id) = department.manager_id {
            if !employee_ids.contains(&manager_id) {
                return Err(seed_validation(&format!(
                    "Department {} references non-existent manager employee {}",
                    department.id, manager_id
                )));
            }
        }
    }

    for employee in &seed.employees {
        if employee.last_name.trim().is_empty() || employee.first_name.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Employee {} must have a first and last name",
                employee.id
            )));
        }
    }

    // Validate referential integrity for links
    for link in &seed.department_links {
        if !employee_ids.contains(&link.employee) {
            return Err(seed_validation(&format!(
                "Department link {} references non-existent employee {}",
                link.id, link.employee
            )));
        }
        if !department_ids.contains(&link.department) {
            return Err(seed_validation(&format!(
                "Department link {} references non-existent department {}",
                link.id, link.department
            )));
        }
    }

    for record in &seed.employment_history {
        if !employee_ids.contains(&record.employee) {
            return Err(seed_validation(&format!(
                "Employment history {} references non-existent employee {}",
                record.id, record.employee
            )));
        }
        if let Some(termination) = record.termination_date {
            if termination < record.hire_date {
                return Err(seed_validation(&format!(
                    "Employment history {} terminates ({}) before hire ({})",
                    record.id, termination, record.hire_date
                )));
            }
        }
    }

    let mut members = HashSet::new();
    for membership in &seed.union_memberships {
        if !employee_ids.contains(&membership.employee) {
            return Err(seed_validation(&format!(
                "Union membership {} references non-existent employee {}",
                membership.id, membership.employee
            )));
        }
        if !members.insert(membership.employee) {
            return Err(seed_validation(&format!(
                "Employee {} has more than one union membership",
                membership.employee
            )));
        }
    }

    for benefit in &seed.union_benefits {
        if !membership_ids.contains(&benefit.membership) {
            return Err(seed_validation(&format!(
                "Union benefit {} references non-existent membership {}",
                benefit.id, benefit.membership
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use personnel_core::ExErrorKind;

    const HEADER: &str = "schema_version: 0\norganization:\n  name: Acme\n";

    #[test]
    fn test_empty_lists_default() {
        let seed = parse_seed_str(HEADER).unwrap();
        assert!(seed.employees.is_empty());
        assert!(seed.union_benefits.is_empty());
    }

    #[test]
    fn test_blank_optional_text_is_absent() {
        let yaml = format!(
            "{}employees:\n  - id: 1\n    last_name: Ivanov\n    first_name: Ivan\n    patronymic: \"  \"\n    date_of_birth: 1980-01-01\n    hire_date: 2010-01-01\n",
            HEADER
        );
        let seed = parse_seed_str(&yaml).unwrap();
        assert!(seed.employees[0].patronymic.is_none());
    }

    #[test]
    fn test_zero_identity_rejected() {
        let yaml = format!("{}departments:\n  - id: 0\n    name: Sales\n", HEADER);
        let err = parse_seed_str(&yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("identities start at 1"));
    }

    #[test]
    fn test_unknown_manager_rejected() {
        let yaml = format!(
            "{}departments:\n  - id: 1\n    name: Sales\n    manager_id: 5\n",
            HEADER
        );
        let err = parse_seed_str(&yaml).unwrap_err();
        assert!(err.message().contains("manager"));
    }
}
