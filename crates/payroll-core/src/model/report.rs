use rust_decimal::Decimal;
use serde::Serialize;

use super::Employee;
use crate::salary::calculate_salary;

/// An employee paired with the pay amount computed for it
///
/// Renderers print `pay` as-is; they never derive it again from the
/// compensation fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeReport {
    pub employee: Employee,
    pub pay: Decimal,
}

impl EmployeeReport {
    /// Build a report by running the salary calculator once
    pub fn new(employee: Employee) -> Self {
        let pay = calculate_salary(&employee);
        Self { employee, pay }
    }
}

impl From<Employee> for EmployeeReport {
    fn from(employee: Employee) -> Self {
        Self::new(employee)
    }
}
