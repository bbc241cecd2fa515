use crate::errors::ValidationError;

/// Message shown when any required field of the user or permission form is blank.
pub const FILL_REQUIRED: &str = "Please fill in all required fields";

/// Fail with `message` if any of the values is blank after trimming.
pub fn require_all(values: &[&str], message: &str) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new(message));
    }
    Ok(())
}

/// Validate a required text field: `"{field_name} is required"` when blank.
pub fn require(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{field_name} is required")));
    }
    Ok(())
}

/// Parse a non-negative whole number from a number input.
pub fn parse_number(value: &str, field_name: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(format!("{field_name} must be a whole number")))
}
