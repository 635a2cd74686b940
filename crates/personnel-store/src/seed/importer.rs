//! Seed importer orchestration
//!
//! Builds a fresh `StoreContext` from a validated seed by calling the core
//! store and relation operations, so owner collections are populated exactly
//! as they would be by runtime calls.

use crate::errors::{import_error, Result};
use crate::seed::{compute_seed_digest, parse_seed_file, SeedV0};
use personnel_core::ops::relation_ops;
use personnel_core::{log_op_end, log_op_error, log_op_start, StoreContext};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Entity counts of a populated context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub departments: usize,
    pub employees: usize,
    pub department_links: usize,
    pub employment_history: usize,
    pub union_memberships: usize,
    pub union_benefits: usize,
}

impl SeedSummary {
    pub fn of(ctx: &StoreContext) -> Self {
        Self {
            departments: ctx.departments().len(),
            employees: ctx.employees().len(),
            department_links: ctx.department_links().len(),
            employment_history: ctx.employment_history().len(),
            union_memberships: ctx.union_memberships().len(),
            union_benefits: ctx.union_benefits().len(),
        }
    }
}

/// A seed file loaded into memory
#[derive(Debug, Clone)]
pub struct LoadedSeed {
    pub organization: String,

    /// SHA256 hex digest of the canonicalized seed
    pub digest: String,

    pub context: StoreContext,
}

impl LoadedSeed {
    pub fn summary(&self) -> SeedSummary {
        SeedSummary::of(&self.context)
    }
}

/// Populate a fresh context from a parsed seed
///
/// Owners are inserted before the records that reference them. The seed is
/// expected to have passed validation; any store error is still reported.
pub fn import_seed(seed: &SeedV0) -> Result<StoreContext> {
    let mut ctx = StoreContext::new();

    for department in &seed.departments {
        ctx.departments_mut()
            .add(department.to_model())
            .map_err(import_error)?;
    }
    for employee in &seed.employees {
        ctx.employees_mut()
            .add(employee.to_model())
            .map_err(import_error)?;
    }
    for link in &seed.department_links {
        relation_ops::insert_department_link(&mut ctx, link.to_model()).map_err(import_error)?;
    }
    for record in &seed.employment_history {
        relation_ops::insert_employment_history(&mut ctx, record.to_model())
            .map_err(import_error)?;
    }
    for membership in &seed.union_memberships {
        relation_ops::insert_union_membership(&mut ctx, membership.to_model())
            .map_err(import_error)?;
    }
    for benefit in &seed.union_benefits {
        relation_ops::insert_union_benefit(&mut ctx, benefit.to_model()).map_err(import_error)?;
    }

    Ok(ctx)
}

/// Parse, digest and import a seed file
///
/// This is the main entry point for seed loading. It:
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest
/// 3. Imports every record into a new context
pub fn load_seed_file(path: &Path) -> Result<LoadedSeed> {
    let start = Instant::now();
    log_op_start!("seed_load", path = %path.display());

    let result = parse_seed_file(path).and_then(|seed| {
        let digest = compute_seed_digest(&seed)?;
        let context = import_seed(&seed)?;
        Ok(LoadedSeed {
            organization: seed.organization.name,
            digest,
            context,
        })
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(loaded) => {
            let row_count = loaded.context.employees().len() as u64;
            log_op_end!(
                "seed_load",
                duration_ms = duration_ms,
                row_count = row_count,
                digest = %loaded.digest
            );
            Ok(loaded)
        }
        Err(e) => {
            log_op_error!("seed_load", e.clone(), duration_ms = duration_ms);
            Err(e)
        }
    }
}
