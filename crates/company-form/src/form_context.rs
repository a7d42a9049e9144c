// File: src/form_context.rs
// Purpose: Snapshot handed to a rendering surface: per-field errors and current values

use std::collections::BTreeMap;

use crate::field::FieldName;
use crate::validation::FieldErrors;

/// Errors and raw values of a form, for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    /// Field names to error messages
    pub errors: FieldErrors,
    /// Current field values, rendered as text; untouched fields are absent
    pub values: BTreeMap<FieldName, String>,
}

impl FormContext {
    pub fn new(errors: FieldErrors, values: BTreeMap<FieldName, String>) -> Self {
        Self { errors, values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if field has an error
    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains(field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Current value of a field; untouched fields read as `""`
    pub fn get_value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(|s| s.as_str()).unwrap_or("")
    }

    /// Helper text for a field: its error message, or `""`
    pub fn helper_text(&self, field: FieldName) -> &str {
        self.get_error(field).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldValidationError;

    #[test]
    fn test_form_context_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldValidationError::new(FieldName::ClientEmail, "Invalid format email"));

        let context = FormContext::new(errors, BTreeMap::new());

        assert!(context.has_error(FieldName::ClientEmail));
        assert!(!context.has_error(FieldName::Name));
        assert_eq!(context.get_error(FieldName::ClientEmail), Some("Invalid format email"));
        assert_eq!(context.helper_text(FieldName::ClientEmail), "Invalid format email");
        assert_eq!(context.helper_text(FieldName::Name), "");
        assert!(context.has_errors());
    }

    #[test]
    fn test_form_context_values() {
        let mut values = BTreeMap::new();
        values.insert(FieldName::Name, "Acme".to_string());

        let context = FormContext::new(FieldErrors::new(), values);

        assert_eq!(context.get_value(FieldName::Name), "Acme");
        assert_eq!(context.get_value(FieldName::ClientEmail), "");
    }

    #[test]
    fn test_empty_form_context() {
        let context = FormContext::empty();
        assert!(!context.has_errors());
        assert!(context.get_error(FieldName::Name).is_none());
    }
}
