// File: src/validation/mod.rs
// Purpose: Validation results and the validator trait

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::field::FieldName;
use crate::record::FormRecord;

pub mod rules;

pub use rules::{Rule, RuleCheck, REQUIRED_MESSAGE};

/// Trait for types that can be validated against the form schema
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with one message per failing field
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// A single field failing its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Field name to error message, at most one message per field.
///
/// Serializes as `{"companyType": "Required", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier message for the same field
    pub fn insert(&mut self, error: FieldValidationError) {
        self.0.insert(error.field, error.message);
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Outcome of validating every field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(FormRecord),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn record(&self) -> Option<&FormRecord> {
        match self {
            ValidationResult::Valid(record) => Some(record),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    /// Error for a specific field, if it failed
    pub fn get_error(&self, field: FieldName) -> Option<&str> {
        self.errors().and_then(|errors| errors.get(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_one_message_per_field() {
        let errors: FieldErrors = vec![
            FieldValidationError::new(FieldName::Name, "Required"),
            FieldValidationError::new(FieldName::Name, "Max 100 characters"),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Name), Some("Max 100 characters"));
    }

    #[test]
    fn test_field_errors_json() {
        let errors: FieldErrors = vec![
            FieldValidationError::new(FieldName::CompanyPurpose, "Required"),
            FieldValidationError::new(FieldName::Name, "Required"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"name":"Required","companyPurpose":"Required"}"#
        );
    }

    #[test]
    fn test_validation_result_accessors() {
        let valid = ValidationResult::Valid(FormRecord::default());
        assert!(valid.is_valid());
        assert!(valid.errors().is_none());
        assert!(valid.get_error(FieldName::Name).is_none());

        let mut errors = FieldErrors::new();
        errors.insert(FieldValidationError::new(FieldName::ClientEmail, "Invalid format email"));
        let invalid = ValidationResult::Invalid(errors);
        assert!(!invalid.is_valid());
        assert!(invalid.record().is_none());
        assert_eq!(invalid.get_error(FieldName::ClientEmail), Some("Invalid format email"));
    }

    #[test]
    fn test_error_display() {
        let error = FieldValidationError::new(FieldName::ClientPhoneFirst, "Invalid format phone number");
        assert_eq!(error.to_string(), "clientPhoneFirst: Invalid format phone number");
    }
}
