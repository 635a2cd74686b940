//! Employee record commands
//!
//! Usage: personnel employee --seed <PATH> list
//!        personnel employee --seed <PATH> get <ID>

use clap::{Args, Subcommand};
use personnel_engine::{CrudService, EmployeeService};

use super::{print_json, request, SeedSource};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,

    #[command(flatten)]
    pub source: SeedSource,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List every employee in store order
    List,
    /// Show one employee
    Get {
        /// Employee identity
        id: u32,
    },
}

pub fn execute(args: EmployeeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = EmployeeService::new(args.source.load()?);
    let request = request();

    match args.command {
        EmployeeCommand::List => print_json(&service.list(&request)?),
        EmployeeCommand::Get { id } => match service.get(&request, id)? {
            Some(employee) => print_json(&employee),
            None => Err(format!("employee {} not found", id).into()),
        },
    }
}
