//! Core types shared across payroll facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
