// Integration tests for seed parsing and validation

use personnel_core::ExErrorKind;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_parse_minimal_seed() {
    let path = fixtures_dir().join("seed_minimal.yaml");

    let result = personnel_store::seed::parse_seed_file(&path);

    assert!(
        result.is_ok(),
        "Should parse minimal seed: {:?}",
        result.err()
    );

    let seed = result.unwrap();
    assert_eq!(seed.schema_version, 0);
    assert_eq!(seed.organization.name, "Minimal Works");
    assert_eq!(seed.employees.len(), 1);
    assert!(seed.departments.is_empty());
}

#[test]
fn test_parse_full_seed() {
    let path = fixtures_dir().join("seed_full.yaml");

    let result = personnel_store::seed::parse_seed_file(&path);
    assert!(result.is_ok(), "Should parse full seed: {:?}", result.err());

    let seed = result.unwrap();
    assert_eq!(seed.departments.len(), 3);
    assert_eq!(seed.employees.len(), 4);
    assert_eq!(seed.department_links.len(), 5);
    assert_eq!(seed.employment_history.len(), 4);
    assert!(!seed.union_memberships[1].is_member);
    assert!(seed.union_memberships[0].is_member);
    // blank patronymic is read as absent
    assert!(seed.employees[3].patronymic.is_none());
}

#[test]
fn test_reject_invalid_schema_version() {
    let path = fixtures_dir().join("seed_invalid_schema_version.yaml");

    let err = personnel_store::seed::parse_seed_file(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(
        err.message().contains("schema_version"),
        "Error should mention schema_version: {}",
        err
    );
}

#[test]
fn test_reject_dangling_department_link() {
    let path = fixtures_dir().join("seed_dangling_link.yaml");

    let err = personnel_store::seed::parse_seed_file(&path).unwrap_err();
    assert!(err.message().contains("non-existent department 2"), "{}", err);
}

#[test]
fn test_reject_duplicate_employee_identity() {
    let path = fixtures_dir().join("seed_duplicate_employee.yaml");

    let err = personnel_store::seed::parse_seed_file(&path).unwrap_err();
    assert!(err.message().contains("Duplicate employee id 1"), "{}", err);
}

#[test]
fn test_reject_inverted_employment_period() {
    let path = fixtures_dir().join("seed_inverted_period.yaml");

    let err = personnel_store::seed::parse_seed_file(&path).unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_INPUT");
    assert!(err.message().contains("before hire"), "{}", err);
}

#[test]
fn test_reject_second_membership_for_employee() {
    let yaml = r#"
schema_version: 0
organization:
  name: Acme
employees:
  - { id: 1, last_name: A, first_name: B, date_of_birth: 1980-01-01, hire_date: 2000-01-01 }
union_memberships:
  - { id: 1, employee: 1 }
  - { id: 2, employee: 1 }
"#;
    let err = personnel_store::seed::parse_seed_str(yaml).unwrap_err();
    assert!(err.message().contains("more than one union membership"));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = fixtures_dir().join("does_not_exist.yaml");

    let err = personnel_store::seed::parse_seed_file(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.op(), Some("seed_read"));
}

#[test]
fn test_malformed_yaml_rejected() {
    let err = personnel_store::seed::parse_seed_str("schema_version: [").unwrap_err();
    assert!(err.message().starts_with("YAML parse error"));
}
