use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PayrollError;

/// Store-assigned employee identifier
///
/// Wraps the SQLite `AUTOINCREMENT` rowid. Never constructed from a process-wide
/// counter; the store hands these out on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employment arrangement, as persisted in the `employee_type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    FullTime,
    PartTime,
}

impl EmployeeKind {
    /// Column label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeKind::FullTime => "Full-time",
            EmployeeKind::PartTime => "Part-time",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeKind {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(EmployeeKind::FullTime),
            "Part-time" => Ok(EmployeeKind::PartTime),
            other => Err(PayrollError::UnknownEmployeeType {
                value: other.to_string(),
            }),
        }
    }
}

/// How an employee is paid
///
/// Only the fields of the active variant are meaningful; the persisted row
/// stores zero in the columns belonging to the other variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compensation {
    /// Fixed salary; hours are not tracked
    FullTime { salary: Decimal },
    /// Hourly rate times hours accumulated through clock-in
    PartTime {
        hourly_rate: Decimal,
        hours_worked: Decimal,
    },
}

impl Compensation {
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Compensation::FullTime { .. } => EmployeeKind::FullTime,
            Compensation::PartTime { .. } => EmployeeKind::PartTime,
        }
    }
}

/// A persisted employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub compensation: Compensation,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            id,
            name: name.into(),
            compensation,
        }
    }

    pub fn kind(&self) -> EmployeeKind {
        self.compensation.kind()
    }

    pub fn is_part_time(&self) -> bool {
        self.kind() == EmployeeKind::PartTime
    }
}
