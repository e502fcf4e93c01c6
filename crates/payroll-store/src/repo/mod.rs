//! Repository layer over the `employee` table

pub mod employee_repo;
mod row;

pub use employee_repo::EmployeeRepo;
