//! Field-level input checks shared by create and update handlers.

use validator::Validate;

use crate::error::CoreError;

/// Run derive-based validation and convert failures into [`CoreError`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// A required text field must contain something other than whitespace.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// For partial updates: a required field may be omitted but never blanked.
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}
