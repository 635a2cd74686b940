//! CLI integration tests
//!
//! Each test writes a seed into a temporary directory, runs the binary
//! against it and inspects the JSON printed on stdout.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const SEED: &str = r#"
schema_version: 0
organization:
  name: Test Works
departments:
  - { id: 1, name: Production }
  - { id: 2, name: Quality Control }
employees:
  - id: 1
    last_name: Ivanov
    first_name: Ivan
    patronymic: Ivanovich
    date_of_birth: 1974-06-01
    hire_date: 1998-09-01
    department: Production
  - id: 2
    last_name: Smith
    first_name: John
    date_of_birth: 1984-06-01
    hire_date: 2003-06-01
    department: Production
department_links:
  - { id: 1, employee: 1, department: 1 }
  - { id: 2, employee: 1, department: 2 }
employment_history:
  - { id: 1, employee: 2, hire_date: 2000-01-01, termination_date: 2002-12-31, position: Intern }
union_memberships:
  - { id: 1, employee: 1 }
union_benefits:
  - { id: 1, membership: 1, granted_on: 2023-06-02, benefit_type: Voucher }
  - { id: 2, membership: 1, granted_on: 2023-06-01, benefit_type: Expired }
"#;

fn write_seed(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("seed.yaml");
    fs::write(&path, SEED).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_personnel"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_seed_check_prints_digest_and_counts() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let json = stdout_json(&run(&["seed", "check", seed.to_str().unwrap()]));

    assert_eq!(json["organization"], "Test Works");
    assert_eq!(json["digest"].as_str().unwrap().len(), 64);
    assert_eq!(json["counts"]["employees"], 2);
    assert_eq!(json["counts"]["union_benefits"], 2);
}

#[test]
fn test_seed_check_rejects_invalid_seed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.yaml");
    fs::write(&path, "schema_version: 3\norganization:\n  name: X\n").unwrap();

    let output = run(&["seed", "check", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_INPUT"));
}

#[test]
fn test_employee_get_and_list() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);
    let seed = seed.to_str().unwrap();

    let json = stdout_json(&run(&["employee", "--seed", seed, "get", "1"]));
    assert_eq!(json["full_name"], "Ivanov Ivan Ivanovich");

    let json = stdout_json(&run(&["employee", "--seed", seed, "list"]));
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["employment_history_count"], 1);
}

#[test]
fn test_employee_get_missing_fails() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let output = run(&["employee", "--seed", seed.to_str().unwrap(), "get", "42"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_department_list_counts_employees() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);

    let json = stdout_json(&run(&["department", "--seed", seed.to_str().unwrap(), "list"]));
    assert_eq!(json[0]["name"], "Production");
    assert_eq!(json[0]["employee_count"], 1);
}

#[test]
fn test_analytics_pinned_reference_date() {
    let temp_dir = TempDir::new().unwrap();
    let seed = write_seed(&temp_dir);
    let seed = seed.to_str().unwrap();
    let analytics = |query: &[&str]| {
        let mut args = vec!["analytics", "--seed", seed, "--as-of", "2024-06-01"];
        args.extend_from_slice(query);
        stdout_json(&run(&args))
    };

    // 2024 is a leap year: 2023-06-01 lies 366 days back
    let benefits = analytics(&["union-benefits"]);
    let benefits = benefits.as_array().unwrap();
    assert_eq!(benefits.len(), 1);
    assert_eq!(benefits[0]["benefit_type"], "Voucher");

    let ages = analytics(&["average-age"]);
    let production = ages["Production"].as_f64().unwrap();
    assert!((production - 45.0).abs() < 0.01, "average was {}", production);

    let multi = analytics(&["multiple-departments"]);
    assert_eq!(multi[0]["id"], 1);

    let archive = analytics(&["termination-archive"]);
    assert_eq!(archive[0]["position"], "Intern");

    let top = analytics(&["top-seniority"]);
    assert_eq!(top[0]["id"], 1);

    let by_dept = analytics(&["by-department", "Production"]);
    assert_eq!(by_dept.as_array().unwrap().len(), 2);
}
