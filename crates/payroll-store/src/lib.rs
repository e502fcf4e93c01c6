//! Payroll Store - SQLite persistence for employee records
//!
//! Provides:
//! - Connection management
//! - Embedded SQL migrations with checksums
//! - `EmployeeRepo`, the CRUD surface over the `employee` table
//! - One-time demonstration seeding of an empty table

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::EmployeeRepo;
