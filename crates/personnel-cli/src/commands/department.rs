//! Department record commands
//!
//! Usage: personnel department --seed <PATH> list
//!        personnel department --seed <PATH> get <ID>

use clap::{Args, Subcommand};
use personnel_engine::{CrudService, DepartmentService};

use super::{print_json, request, SeedSource};

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    pub command: DepartmentCommand,

    #[command(flatten)]
    pub source: SeedSource,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// List every department in store order
    List,
    /// Show one department
    Get {
        /// Department identity
        id: u32,
    },
}

pub fn execute(args: DepartmentArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = DepartmentService::new(args.source.load()?);
    let request = request();

    match args.command {
        DepartmentCommand::List => print_json(&service.list(&request)?),
        DepartmentCommand::Get { id } => match service.get(&request, id)? {
            Some(department) => print_json(&department),
            None => Err(format!("department {} not found", id).into()),
        },
    }
}
