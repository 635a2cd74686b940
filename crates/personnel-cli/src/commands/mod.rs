pub mod analytics;
pub mod department;
pub mod employee;
pub mod seed;

use clap::Args;
use personnel_core_types::RequestContext;
use personnel_engine::{load_shared_context, SharedContext};
use serde::Serialize;
use std::path::PathBuf;

/// Dataset every read command runs against
#[derive(Debug, Args)]
pub struct SeedSource {
    /// Path to the seed YAML file to load
    #[arg(long, value_name = "PATH")]
    pub seed: PathBuf,
}

impl SeedSource {
    pub fn load(&self) -> Result<SharedContext, Box<dyn std::error::Error>> {
        let (_, ctx) = load_shared_context(&self.seed)?;
        Ok(ctx)
    }
}

/// One request per CLI invocation
pub fn request() -> RequestContext {
    RequestContext::new()
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
