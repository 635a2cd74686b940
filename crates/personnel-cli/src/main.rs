//! Personnel CLI
//!
//! Command-line interface for the personnel ledger

use clap::{Parser, Subcommand};
use personnel_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "personnel")]
#[command(about = "Personnel ledger - employee records and HR analytics", long_about = None)]
struct Cli {
    /// Logging profile (dev, prod); logs go to stderr, RUST_LOG overrides the filter
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed file operations
    Seed(commands::seed::SeedArgs),
    /// Employee records
    Employee(commands::employee::EmployeeArgs),
    /// Department records
    Department(commands::department::DepartmentArgs),
    /// Analytics reports
    Analytics(commands::analytics::AnalyticsArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Employee(args) => commands::employee::execute(args),
        Commands::Department(args) => commands::department::execute(args),
        Commands::Analytics(args) => commands::analytics::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
