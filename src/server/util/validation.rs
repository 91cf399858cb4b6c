//! Helpers shared by the services when assembling validation failures.
//!
//! Declarative rules live on the parameter types via `#[derive(Validate)]`; rules that need
//! the database (referenced rows must exist) are appended here before failing with a 422.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::server::error::AppError;

/// Trims submitted text and treats blank input as absent.
pub fn normalize_input(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builds a single rule failure carrying a client-facing message.
pub fn rule_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Failure for a foreign key that does not reference an existing row.
///
/// # Arguments
/// - `label` - Human readable field name, e.g. `"user id"`
pub fn missing_reference(label: &str) -> ValidationError {
    rule_error("exists", format!("The selected {} is invalid.", label))
}

/// Starts an error collection from the outcome of a derived `validate()` call.
pub fn collect(result: Result<(), ValidationErrors>) -> ValidationErrors {
    result.err().unwrap_or_else(ValidationErrors::new)
}

/// Fails with `AppError::Validation` when any rule failed.
pub fn ensure_valid(errors: ValidationErrors) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_drops_blank_input() {
        assert_eq!(
            normalize_input(Some("  hello ".to_string())),
            Some("hello".to_string())
        );
        assert_eq!(normalize_input(Some("   ".to_string())), None);
        assert_eq!(normalize_input(None), None);
    }

    #[test]
    fn ensure_valid_passes_empty_collection() {
        assert!(ensure_valid(ValidationErrors::new()).is_ok());
    }

    #[test]
    fn ensure_valid_fails_with_collected_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("user_id", missing_reference("user id"));

        let result = ensure_valid(errors);

        let Err(AppError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        let field_errors = errors.field_errors();
        let user_errors = field_errors.get("user_id").unwrap();
        assert_eq!(
            user_errors[0].message.as_deref(),
            Some("The selected user id is invalid.")
        );
    }
}
