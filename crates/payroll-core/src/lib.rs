//! Payroll Core - domain model and pure payroll logic
//!
//! This crate provides the foundational data structures and operations for
//! the payroll record-keeper, including:
//! - Employee model with full-time / part-time compensation variants
//! - Salary calculation over the compensation variant
//! - Input validation for names and monetary amounts
//! - Text rendering of employee reports
//! - Structured error and logging facilities shared by the store and CLI

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod rules;
pub mod salary;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PayrollError, Result};
pub use model::{Compensation, Employee, EmployeeId, EmployeeKind, EmployeeReport};
pub use salary::calculate_salary;
