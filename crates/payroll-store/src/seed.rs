//! Demonstration seed data
//!
//! Two canonical rows, inserted once when the employee table is first found
//! empty at startup.

use payroll_core::{log_op_end, log_op_start};
use payroll_core::{EmployeeId, EmployeeKind};
use rust_decimal::Decimal;
use rusqlite::Connection;

use crate::errors::{from_rusqlite, Result};
use crate::repo::employee_repo::insert_row;
use crate::repo::EmployeeRepo;

/// One canonical demonstration row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedEmployee {
    pub name: &'static str,
    pub kind: EmployeeKind,
    pub salary: Decimal,
    pub hourly_rate: Decimal,
    pub hours_worked: Decimal,
}

/// The canonical seed rows, in insertion order
pub fn seed_employees() -> [SeedEmployee; 2] {
    [
        SeedEmployee {
            name: "John Doe",
            kind: EmployeeKind::FullTime,
            salary: Decimal::new(5_000_000, 2),
            hourly_rate: Decimal::ZERO,
            hours_worked: Decimal::ZERO,
        },
        SeedEmployee {
            name: "Jane Smith",
            kind: EmployeeKind::PartTime,
            salary: Decimal::ZERO,
            hourly_rate: Decimal::new(2_000, 2),
            hours_worked: Decimal::new(30, 0),
        },
    ]
}

/// Insert the canonical rows in one transaction
///
/// Does not check whether the table is empty; use [`seed_if_empty`] at startup.
pub fn seed(conn: &mut Connection) -> Result<Vec<EmployeeId>> {
    log_op_start!("seed");
    let start = std::time::Instant::now();

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let rows = seed_employees();
    let mut ids = Vec::with_capacity(rows.len());
    for row in &rows {
        ids.push(insert_row(
            &tx,
            row.name,
            row.kind,
            row.salary,
            row.hourly_rate,
            row.hours_worked,
        )?);
    }
    tx.commit().map_err(from_rusqlite)?;

    log_op_end!(
        "seed",
        duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        row_count = ids.len()
    );
    Ok(ids)
}

/// Seed only when the table holds no rows
///
/// Returns whether seeding happened.
pub fn seed_if_empty(conn: &mut Connection) -> Result<bool> {
    if !EmployeeRepo::is_empty(conn)? {
        tracing::debug!("employee table already populated, skipping seed");
        return Ok(false);
    }
    seed(conn)?;
    Ok(true)
}
