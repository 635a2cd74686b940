//! Analytics report commands
//!
//! Usage: personnel analytics --seed <PATH> [--as-of <YYYY-MM-DD>] <QUERY>

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use personnel_core::{Clock, FixedClock, SystemClock};
use personnel_engine::AnalyticsService;
use std::sync::Arc;

use super::{print_json, request, SeedSource};

#[derive(Debug, Args)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub query: AnalyticsQuery,

    #[command(flatten)]
    pub source: SeedSource,

    /// Reference date for date-relative reports (defaults to today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsQuery {
    /// Employees whose department label matches exactly
    ByDepartment {
        /// Department name (case-sensitive)
        name: String,
    },
    /// Employees linked to two or more departments
    MultipleDepartments,
    /// Terminated employment periods
    TerminationArchive,
    /// Average age per department label
    AverageAge,
    /// Union benefits granted within the last 365 days
    UnionBenefits,
    /// The five most senior employees
    TopSeniority,
}

pub fn execute(args: AnalyticsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let clock: Arc<dyn Clock> = match args.as_of {
        Some(date) => Arc::new(FixedClock::new(date)),
        None => Arc::new(SystemClock),
    };
    let service = AnalyticsService::new(args.source.load()?, clock);
    let request = request();

    match args.query {
        AnalyticsQuery::ByDepartment { name } => {
            print_json(&service.employees_by_department(&request, &name)?)
        }
        AnalyticsQuery::MultipleDepartments => {
            print_json(&service.employees_in_multiple_departments(&request)?)
        }
        AnalyticsQuery::TerminationArchive => print_json(&service.termination_archive(&request)?),
        AnalyticsQuery::AverageAge => print_json(&service.average_age_by_department(&request)?),
        AnalyticsQuery::UnionBenefits => print_json(&service.union_benefits_last_year(&request)?),
        AnalyticsQuery::TopSeniority => print_json(&service.top_five_by_seniority(&request)?),
    }
}
