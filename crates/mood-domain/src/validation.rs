//! Request validation

use crate::error::DomainError;

/// Message returned when a request carries no text
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// Accept any non-empty text, unchanged
///
/// Only absence and the empty string are rejected. Whitespace-only input
/// and non-language text pass through as-is.
pub fn validate(text: Option<&str>) -> Result<&str, DomainError> {
    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(DomainError::InvalidInput(NO_TEXT_MESSAGE.to_string())),
    }
}
