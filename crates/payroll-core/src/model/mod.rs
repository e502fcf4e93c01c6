pub mod employee;
pub mod report;

pub use employee::{Compensation, Employee, EmployeeId, EmployeeKind};
pub use report::EmployeeReport;
