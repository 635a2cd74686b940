//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use crate::errors::{serialization_error, Result};
use crate::seed::format_v0::SeedV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
///
/// Every record list is sorted by identity, so the digest does not depend
/// on the order records were written in the file.
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    organization_name: String,
    departments: Vec<serde_json::Value>,
    employees: Vec<serde_json::Value>,
    department_links: Vec<serde_json::Value>,
    employment_history: Vec<serde_json::Value>,
    union_memberships: Vec<serde_json::Value>,
    union_benefits: Vec<serde_json::Value>,
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let canonical = canonicalize_seed(seed)?;

    let json =
        serde_json::to_string(&canonical).map_err(|e| serialization_error("seed_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(hex::encode(result))
}

/// Serialize records sorted by identity
fn sorted_records<T, F>(records: &[T], id_of: F) -> Result<Vec<serde_json::Value>>
where
    T: Serialize,
    F: Fn(&T) -> u32,
{
    let mut ordered: Vec<&T> = records.iter().collect();
    ordered.sort_by_key(|r| id_of(r));
    ordered
        .into_iter()
        .map(|r| serde_json::to_value(r).map_err(|e| serialization_error("seed_digest", e)))
        .collect()
}

/// Canonicalize a seed for deterministic digest calculation
fn canonicalize_seed(seed: &SeedV0) -> Result<CanonicalSeed> {
    Ok(CanonicalSeed {
        schema_version: seed.schema_version,
        organization_name: seed.organization.name.clone(),
        departments: sorted_records(&seed.departments, |d| d.id)?,
        employees: sorted_records(&seed.employees, |e| e.id)?,
        department_links: sorted_records(&seed.department_links, |l| l.id)?,
        employment_history: sorted_records(&seed.employment_history, |h| h.id)?,
        union_memberships: sorted_records(&seed.union_memberships, |m| m.id)?,
        union_benefits: sorted_records(&seed.union_benefits, |b| b.id)?,
    })
}
