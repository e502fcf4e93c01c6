//! Report command
//!
//! Usage: payroll-cli report [--id <ID>] [--json]

use clap::Args;
use payroll_core::errors::{ExError, PayrollError};
use payroll_core::render::{render_all, render_employee};
use payroll_core::{EmployeeId, EmployeeReport};
use payroll_store::EmployeeRepo;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report a single employee by id (default: all employees)
    #[arg(long)]
    pub id: Option<i64>,

    /// Emit JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Execute report command
pub fn execute(args: ReportArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    match args.id {
        Some(raw) => {
            let id = EmployeeId::new(raw);
            let employee = EmployeeRepo::find_by_id(conn, id)?.ok_or_else(|| {
                ExError::from(PayrollError::EmployeeNotFound { employee_id: raw }).with_op("report")
            })?;
            let report = EmployeeReport::new(employee);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_employee(&report));
            }
        }
        None => {
            let reports: Vec<EmployeeReport> = EmployeeRepo::list_all(conn)?
                .into_iter()
                .map(EmployeeReport::new)
                .collect();

            if args.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print!("{}", render_all(&reports));
            }
        }
    }

    Ok(())
}
