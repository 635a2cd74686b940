//! Seed file commands
//!
//! Usage: personnel seed check <PATH>

use clap::{Args, Subcommand};
use personnel_store::seed::{load_seed_file, SeedSummary};
use serde::Serialize;
use std::path::PathBuf;

use super::print_json;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Validate a seed file and print its digest and record counts
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to seed YAML file
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    organization: String,
    digest: String,
    counts: SeedSummary,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Check(check_args) => execute_check(check_args),
    }
}

fn execute_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_seed_file(&args.path)?;
    let counts = loaded.summary();

    print_json(&CheckReport {
        organization: loaded.organization,
        digest: loaded.digest,
        counts,
    })
}
