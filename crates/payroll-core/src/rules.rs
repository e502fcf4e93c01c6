pub mod validation;

pub use validation::{max_amount, validate_amount, validate_name};
