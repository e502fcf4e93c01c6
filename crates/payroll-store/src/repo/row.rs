//! Row decoding for the `employee` table
//!
//! `DECIMAL(10, 2)` columns have NUMERIC affinity, so SQLite hands back
//! INTEGER, REAL or TEXT depending on the stored value. Everything is read
//! into `Decimal` at two decimal places.

use payroll_core::{Compensation, Employee, EmployeeId, EmployeeKind};
use rust_decimal::Decimal;
use rusqlite::types::{Type, ValueRef};
use rusqlite::Row;
use std::str::FromStr;

pub(crate) const EMPLOYEE_COLUMNS: &str =
    "id, name, employee_type, salary, hourly_rate, hours_worked";

/// Bind form of a decimal for a NUMERIC column
pub(crate) fn decimal_param(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

pub(crate) fn decimal_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let value = match row.get_ref(idx)? {
        ValueRef::Null => Decimal::ZERO,
        ValueRef::Integer(i) => Decimal::from(i),
        ValueRef::Real(f) => Decimal::try_from(f)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Real, Box::new(e)))?,
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })?;
            Decimal::from_str(text.trim()).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })?
        }
        ValueRef::Blob(_) => {
            return Err(rusqlite::Error::InvalidColumnType(
                idx,
                "decimal".to_string(),
                Type::Blob,
            ))
        }
    };
    Ok(value.round_dp(2))
}

/// Decode a row selected with [`EMPLOYEE_COLUMNS`]
pub(crate) fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let type_label: String = row.get(2)?;

    let kind = EmployeeKind::from_str(&type_label)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    let compensation = match kind {
        EmployeeKind::FullTime => Compensation::FullTime {
            salary: decimal_column(row, 3)?,
        },
        EmployeeKind::PartTime => Compensation::PartTime {
            hourly_rate: decimal_column(row, 4)?,
            hours_worked: decimal_column(row, 5)?,
        },
    };

    Ok(Employee::new(EmployeeId::new(id), name, compensation))
}
