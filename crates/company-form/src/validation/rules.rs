// File: src/validation/rules.rs
// Purpose: Rule table entries pairing a predicate with its message

use company_form_validation::{validate_max_length, validate_range};

use crate::field::{FieldValue, Pattern};

/// Message for a required field left empty or unselected
pub const REQUIRED_MESSAGE: &str = "Required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text of at most this many characters
    MaxLength(usize),
    /// Code within the inclusive range
    Range { min: i64, max: i64 },
    /// Text matching the pattern
    Matches(Pattern),
}

/// A rule and the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCheck {
    pub rule: Rule,
    pub message: &'static str,
}

impl RuleCheck {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }

    /// Check a present, non-empty value.
    ///
    /// A value of the wrong kind for the rule (text for a range, a code
    /// for a pattern) fails with the rule's message.
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        match (self.rule, value) {
            (Rule::MaxLength(max), FieldValue::Text(text)) => {
                validate_max_length(text, max, self.message)
            }
            (Rule::Range { min, max }, FieldValue::Code(code)) => {
                validate_range(*code, min, max, self.message)
            }
            (Rule::Matches(pattern), FieldValue::Text(text)) if pattern.is_match(text) => Ok(()),
            _ => Err(self.message.to_string()),
        }
    }
}
