//! Input validation for ccienv operations.
//!
//! Checks names supplied by the user before anything is sent to the API.

use crate::core::domain::Variable;
use crate::error::{Result, ValidationError};

/// Validate a variable name.
///
/// Names must be usable as environment variable names in a job:
/// - Cannot be empty
/// - Cannot contain `=`, whitespace, or NUL
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    for (i, ch) in name.chars().enumerate() {
        let reason = match ch {
            '=' => "'=' is not allowed",
            '\0' => "NUL is not allowed",
            c if c.is_whitespace() => "whitespace is not allowed",
            _ => continue,
        };
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: format!("{} (position {})", reason, i + 1),
        }
        .into());
    }

    Ok(())
}

/// Validate every name of a desired set.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn validate_desired(desired: &[Variable]) -> Result<()> {
    desired.iter().try_for_each(|var| validate_name(var.name()))
}
