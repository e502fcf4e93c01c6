//! SQLite repository for employee records
//!
//! Every public operation is a single statement (or one transaction) against
//! the connection the caller holds, wrapped in start/end operation logging.

use std::time::Instant;

use payroll_core::errors::{ExError, PayrollError};
use payroll_core::rules::{validate_amount, validate_name};
use payroll_core::{log_op_end, log_op_error, log_op_start};
use payroll_core::{Employee, EmployeeId, EmployeeKind};
use rust_decimal::Decimal;
use rusqlite::{Connection, OptionalExtension};

use super::row::{decimal_param, employee_from_row, EMPLOYEE_COLUMNS};
use crate::errors::{from_rusqlite, is_check_violation, Result};
use crate::migrations::apply_migrations;

/// SQLite repository for the `employee` table
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Create the employee table if it is absent
    ///
    /// Runs the embedded migrations; calling it on an up-to-date database is
    /// a no-op.
    pub fn ensure_schema(conn: &mut Connection) -> Result<()> {
        instrumented("ensure_schema", || apply_migrations(conn))
    }

    /// Number of employee rows
    pub fn count(conn: &Connection) -> Result<u64> {
        instrumented("count", || {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM employee", [], |row| row.get(0))
                .map_err(from_rusqlite)?;
            Ok(count.unsigned_abs())
        })
    }

    /// True iff the table holds no rows
    pub fn is_empty(conn: &Connection) -> Result<bool> {
        Ok(Self::count(conn)? == 0)
    }

    /// Insert a full-time employee and return the assigned id
    ///
    /// # Errors
    /// * `InvalidName` - If name is empty or whitespace-only
    /// * `InvalidAmount` - If salary is negative
    /// * `Persistence` - On any SQLite failure
    pub fn insert_full_time(conn: &Connection, name: &str, salary: Decimal) -> Result<EmployeeId> {
        instrumented("insert_full_time", || {
            let name = validate_name(name)?;
            let salary = validate_amount("salary", salary)?;
            insert_row(conn, &name, EmployeeKind::FullTime, salary, Decimal::ZERO, Decimal::ZERO)
        })
    }

    /// Insert a part-time employee with zero hours and return the assigned id
    ///
    /// # Errors
    /// * `InvalidName` - If name is empty or whitespace-only
    /// * `InvalidAmount` - If hourly_rate is negative
    /// * `Persistence` - On any SQLite failure
    pub fn insert_part_time(
        conn: &Connection,
        name: &str,
        hourly_rate: Decimal,
    ) -> Result<EmployeeId> {
        instrumented("insert_part_time", || {
            let name = validate_name(name)?;
            let hourly_rate = validate_amount("hourly_rate", hourly_rate)?;
            insert_row(
                conn,
                &name,
                EmployeeKind::PartTime,
                Decimal::ZERO,
                hourly_rate,
                Decimal::ZERO,
            )
        })
    }

    /// Add `delta` hours to a part-time employee
    ///
    /// Returns the number of rows changed: 1 on success, 0 when no part-time
    /// employee has that id. The delta may be negative.
    ///
    /// # Errors
    /// * `InvalidAmount` - If the new total falls outside the column range;
    ///   the row is left unchanged
    /// * `Persistence` - On any other SQLite failure
    pub fn add_hours(conn: &Connection, id: EmployeeId, delta: Decimal) -> Result<usize> {
        instrumented("add_hours", || {
            let affected = conn
                .execute(
                    "UPDATE employee
                     SET hours_worked = ROUND(hours_worked + ?1, 2)
                     WHERE id = ?2 AND employee_type = ?3",
                    rusqlite::params![
                        decimal_param(delta),
                        id.get(),
                        EmployeeKind::PartTime.as_str()
                    ],
                )
                .map_err(|e| {
                    if is_check_violation(&e) {
                        ExError::from(PayrollError::HoursOutOfRange {
                            employee_id: id.get(),
                            delta,
                        })
                        .with_op("add_hours")
                        .with_source(from_rusqlite(e))
                    } else {
                        from_rusqlite(e)
                    }
                })?;

            tracing::debug!(employee_id = id.get(), affected, "clock-in applied");
            Ok(affected)
        })
    }

    /// Look up one employee; `None` when the id is unknown
    pub fn find_by_id(conn: &Connection, id: EmployeeId) -> Result<Option<Employee>> {
        instrumented("find_by_id", || {
            let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?1");
            conn.query_row(&sql, [id.get()], employee_from_row)
                .optional()
                .map_err(from_rusqlite)
        })
    }

    /// All employees in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Employee>> {
        instrumented("list_all", || {
            let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY id");
            let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
            let employees = stmt
                .query_map([], employee_from_row)
                .map_err(from_rusqlite)?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(from_rusqlite)?;

            tracing::debug!(row_count = employees.len(), "listed employees");
            Ok(employees)
        })
    }
}

/// Insert one row with explicit column values
///
/// Callers validate; this only writes. Shared with seeding, which needs to
/// set hours on insert.
pub(crate) fn insert_row(
    conn: &Connection,
    name: &str,
    kind: EmployeeKind,
    salary: Decimal,
    hourly_rate: Decimal,
    hours_worked: Decimal,
) -> Result<EmployeeId> {
    conn.execute(
        "INSERT INTO employee (name, employee_type, salary, hourly_rate, hours_worked)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            name,
            kind.as_str(),
            decimal_param(salary),
            decimal_param(hourly_rate),
            decimal_param(hours_worked),
        ],
    )
    .map_err(from_rusqlite)?;

    let id = EmployeeId::new(conn.last_insert_rowid());
    tracing::debug!(employee_id = id.get(), employee_type = kind.as_str(), "inserted employee");
    Ok(id)
}

fn instrumented<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(op, duration_ms = elapsed_ms(start));
            Ok(value)
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = elapsed_ms(start));
            Err(e)
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;
    use payroll_core::Compensation;

    fn setup() -> Connection {
        let mut conn = open_in_memory().unwrap();
        EmployeeRepo::ensure_schema(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_fresh_table_is_empty() {
        let conn = setup();
        assert!(EmployeeRepo::is_empty(&conn).unwrap());
        assert_eq!(EmployeeRepo::count(&conn).unwrap(), 0);
    }

    #[test]
    fn test_ids_are_assigned_in_sequence() {
        let conn = setup();
        let a = EmployeeRepo::insert_full_time(&conn, "Ann", Decimal::new(1000, 0)).unwrap();
        let b = EmployeeRepo::insert_part_time(&conn, "Bob", Decimal::new(15, 0)).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_part_time_insert_starts_at_zero_hours() {
        let conn = setup();
        let id = EmployeeRepo::insert_part_time(&conn, "Jane", Decimal::new(20, 0)).unwrap();

        let jane = EmployeeRepo::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(
            jane.compensation,
            Compensation::PartTime {
                hourly_rate: Decimal::new(20, 0),
                hours_worked: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_full_time_row_stores_zero_in_part_time_columns() {
        let conn = setup();
        let id = EmployeeRepo::insert_full_time(&conn, "Ann", Decimal::new(1000, 0)).unwrap();

        let (rate, hours): (f64, f64) = conn
            .query_row(
                "SELECT hourly_rate, hours_worked FROM employee WHERE id = ?1",
                [id.get()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!((rate, hours), (0.0, 0.0));
    }

    #[test]
    fn test_clock_in_ignores_full_time_rows() {
        let conn = setup();
        let id = EmployeeRepo::insert_full_time(&conn, "Ann", Decimal::new(1000, 0)).unwrap();

        assert_eq!(
            EmployeeRepo::add_hours(&conn, id, Decimal::new(8, 0)).unwrap(),
            0
        );
    }
}
