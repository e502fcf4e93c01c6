//! Salary calculation
//!
//! A single function matching on the compensation variant.

use rust_decimal::Decimal;

use crate::model::{Compensation, Employee};

/// Compute the pay owed to an employee
///
/// Full-time employees earn their fixed salary. Part-time employees earn
/// `hourly_rate * hours_worked` over the hours accumulated so far.
///
/// Stored amounts and hours are bounded by the `DECIMAL(10, 2)` column
/// range, so the product always fits in a `Decimal`.
///
/// # Example
///
/// ```
/// use payroll_core::{calculate_salary, Compensation, Employee, EmployeeId};
/// use rust_decimal::Decimal;
///
/// let jane = Employee::new(
///     EmployeeId::new(2),
///     "Jane Smith",
///     Compensation::PartTime {
///         hourly_rate: Decimal::new(20, 0),
///         hours_worked: Decimal::new(30, 0),
///     },
/// );
/// assert_eq!(calculate_salary(&jane), Decimal::new(600, 0));
/// ```
pub fn calculate_salary(employee: &Employee) -> Decimal {
    match &employee.compensation {
        Compensation::FullTime { salary } => *salary,
        Compensation::PartTime {
            hourly_rate,
            hours_worked,
        } => hourly_rate * hours_worked,
    }
}
