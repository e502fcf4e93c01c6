//! Input validation for new employee records
//!
//! Names must contain at least one non-whitespace character. Monetary
//! amounts must be zero or greater and fit a `DECIMAL(10, 2)` column. No
//! uniqueness check is applied.

use rust_decimal::Decimal;

use crate::errors::{PayrollError, Result};

/// Validate and normalise an employee name
///
/// Returns the name with surrounding whitespace trimmed.
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PayrollError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Largest magnitude a `DECIMAL(10, 2)` column holds: 99999999.99
pub fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// Validate a salary or hourly rate
///
/// # Errors
/// * `NegativeAmount` - If `value` is below zero
/// * `AmountOutOfRange` - If `value` is above [`max_amount`]
pub fn validate_amount(field: &str, value: Decimal) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PayrollError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    if value > max_amount() {
        return Err(PayrollError::AmountOutOfRange {
            field: field.to_string(),
            value,
            max: max_amount(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("  Ann  ").unwrap(), "Ann");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            validate_name("   "),
            Err(PayrollError::InvalidName { .. })
        ));
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert_eq!(
            validate_amount("salary", Decimal::ZERO).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = validate_amount("hourly_rate", Decimal::new(-1, 0)).unwrap_err();
        assert_eq!(
            err,
            PayrollError::NegativeAmount {
                field: "hourly_rate".to_string(),
                value: Decimal::new(-1, 0),
            }
        );
        assert_eq!(err.to_string(), "hourly_rate cannot be negative (got -1)");
    }

    #[test]
    fn test_column_maximum_allowed() {
        assert_eq!(
            validate_amount("salary", max_amount()).unwrap(),
            Decimal::new(9_999_999_999, 2)
        );
    }

    #[test]
    fn test_amount_above_column_range_rejected() {
        let err = validate_amount("hourly_rate", Decimal::new(10_000_000_000, 2)).unwrap_err();
        assert!(matches!(err, PayrollError::AmountOutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "hourly_rate cannot exceed 99999999.99 (got 100000000.00)"
        );
        assert!(validate_amount("salary", Decimal::MAX).is_err());
    }
}
