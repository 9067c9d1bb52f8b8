//! Validation helper functions for configuration types.

use crate::core::errors::{Result, RethemeError};

/// Validate that a string value is not empty or whitespace.
pub fn validate_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RethemeError::validation_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a list holds at least one non-empty entry, and no empty ones.
pub fn validate_non_empty_list(values: &[String], field: &str) -> Result<()> {
    if values.is_empty() {
        return Err(RethemeError::validation_field(
            format!("{} must contain at least one entry", field),
            field,
        ));
    }
    for value in values {
        validate_non_empty(value, field)?;
    }
    Ok(())
}
