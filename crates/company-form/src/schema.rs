// File: src/schema.rs
// Purpose: The fixed per-field rule table and the functions that evaluate it

use tracing::debug;

use crate::field::{FieldAttrs, FieldKind, FieldName, FieldValue, Pattern};
use crate::input::FormInput;
use crate::options::{COMPANY_PURPOSE_OPTIONS, COMPANY_TYPE_OPTIONS};
use crate::record::FormRecord;
use crate::validation::{
    FieldErrors, FieldValidationError, Rule, RuleCheck, Validate, ValidationResult,
    REQUIRED_MESSAGE,
};

pub const NAME_MAX_LENGTH: usize = 100;

/// Declaration of one field: what it holds and what it must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Checked in order; the first failure is the field's message
    pub rules: &'static [RuleCheck],
}

impl FieldSpec {
    /// Validate one raw value.
    ///
    /// Absent and empty values fail with "Required" on required fields and
    /// pass on optional ones without reaching the rules.
    pub fn validate(&self, value: Option<&FieldValue>) -> Result<(), FieldValidationError> {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ if self.required => {
                return Err(FieldValidationError::new(self.name, REQUIRED_MESSAGE));
            }
            _ => return Ok(()),
        };

        for check in self.rules {
            check
                .check(value)
                .map_err(|message| FieldValidationError::new(self.name, message))?;
        }
        Ok(())
    }

    /// Rendering hints derived from the rules
    pub fn attrs(&self) -> FieldAttrs {
        let mut attrs = FieldAttrs::new(self.label);
        if self.required {
            attrs = attrs.with_attr("required", "");
        }
        attrs = match self.kind {
            FieldKind::FreeText => attrs.with_attr("type", "text"),
            FieldKind::Categorical(_) => attrs.with_attr("type", "select"),
            FieldKind::PatternText(Pattern::Phone) => attrs.with_attr("type", "tel"),
            FieldKind::PatternText(Pattern::Email) => attrs.with_attr("type", "email"),
        };
        for check in self.rules {
            attrs = match check.rule {
                Rule::MaxLength(max) => attrs.with_attr("maxlength", max.to_string()),
                Rule::Range { min, max } => attrs
                    .with_attr("min", min.to_string())
                    .with_attr("max", max.to_string()),
                Rule::Matches(pattern) => attrs.with_attr("pattern", pattern.source()),
            };
        }
        attrs
    }
}

const PHONE_RULES: &[RuleCheck] = &[RuleCheck::new(
    Rule::Matches(Pattern::Phone),
    "Invalid format phone number",
)];

static SCHEMA: [FieldSpec; 6] = [
    FieldSpec {
        name: FieldName::Name,
        label: "Name",
        kind: FieldKind::FreeText,
        required: true,
        rules: &[RuleCheck::new(
            Rule::MaxLength(NAME_MAX_LENGTH),
            "Max 100 characters",
        )],
    },
    FieldSpec {
        name: FieldName::CompanyType,
        label: "Type",
        kind: FieldKind::Categorical(COMPANY_TYPE_OPTIONS),
        required: true,
        rules: &[RuleCheck::new(Rule::Range { min: 1, max: 3 }, REQUIRED_MESSAGE)],
    },
    // The range admits 2, which no option offers.
    FieldSpec {
        name: FieldName::CompanyPurpose,
        label: "Purpose",
        kind: FieldKind::Categorical(COMPANY_PURPOSE_OPTIONS),
        required: true,
        rules: &[RuleCheck::new(Rule::Range { min: 1, max: 4 }, REQUIRED_MESSAGE)],
    },
    FieldSpec {
        name: FieldName::ClientPhoneFirst,
        label: "Phone 1",
        kind: FieldKind::PatternText(Pattern::Phone),
        required: false,
        rules: PHONE_RULES,
    },
    FieldSpec {
        name: FieldName::ClientPhoneSecond,
        label: "Phone 2",
        kind: FieldKind::PatternText(Pattern::Phone),
        required: false,
        rules: PHONE_RULES,
    },
    FieldSpec {
        name: FieldName::ClientEmail,
        label: "Email",
        kind: FieldKind::PatternText(Pattern::Email),
        required: false,
        rules: &[RuleCheck::new(
            Rule::Matches(Pattern::Email),
            "Invalid format email",
        )],
    },
];

/// All field specs in declaration order
pub fn schema() -> &'static [FieldSpec] {
    &SCHEMA
}

pub fn spec_for(field: FieldName) -> &'static FieldSpec {
    // SCHEMA is declared in FieldName::ALL order
    &SCHEMA[field as usize]
}

pub fn validate_field(
    field: FieldName,
    value: Option<&FieldValue>,
) -> Result<(), FieldValidationError> {
    spec_for(field).validate(value)
}

/// Validate every field independently and collect all failures
pub fn validate_all(input: &FormInput) -> ValidationResult {
    match input.validate() {
        Ok(()) => ValidationResult::Valid(FormRecord::normalize(input)),
        Err(errors) => ValidationResult::Invalid(errors),
    }
}

impl Validate for FormInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let errors: FieldErrors = schema()
            .iter()
            .filter_map(|spec| spec.validate(self.get(spec.name).as_ref()).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(failed = errors.len(), "form input failed validation");
            Err(errors)
        }
    }
}
