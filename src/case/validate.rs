//! Input validation shared by the strict and lenient policies.

use serde_json::Value;

use super::CaseError;

/// Extract the textual payload from a dynamic value.
///
/// `Null` and every non-string variant are rejected, mirroring the
/// null/undefined/non-string inputs a dynamic caller can pass.
pub fn as_text(value: &Value) -> Result<&str, CaseError> {
    value.as_str().ok_or(CaseError::InvalidInputType)
}

/// Trim surrounding whitespace and reject blank input.
pub fn non_blank(input: &str) -> Result<&str, CaseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(CaseError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}
