// File: src/form.rs
// Purpose: Form instance: input events, submission and the Editing/Submitted state machine

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{FormConfig, RevalidateMode};
use crate::error::FormError;
use crate::field::{Field, FieldName, FieldValue};
use crate::form_context::FormContext;
use crate::input::FormInput;
use crate::options::{find_option, options_for};
use crate::record::FormRecord;
use crate::schema::{schema, validate_all, validate_field};
use crate::sink::SubmissionSink;
use crate::validation::{FieldErrors, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted,
}

/// One form instance.
///
/// Owns the raw field values and the errors currently on display. Event
/// methods reject misuse with `FormError` and leave the form unchanged;
/// validation failures never surface as `Err`.
#[derive(Debug, Clone)]
pub struct Form {
    input: FormInput,
    errors: FieldErrors,
    state: FormState,
    submit_count: u32,
    submitted: Option<FormRecord>,
    revalidate: RevalidateMode,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self {
            input: FormInput::new(),
            errors: FieldErrors::new(),
            state: FormState::Editing,
            submit_count: 0,
            submitted: None,
            revalidate: RevalidateMode::default(),
        }
    }

    pub fn with_config(config: &FormConfig) -> Self {
        Self {
            revalidate: config.form.revalidate,
            ..Self::new()
        }
    }

    /// Field-change event for a text field
    pub fn set_text(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        if field.is_categorical() {
            return Err(FormError::NotText(field));
        }
        self.input.set(field, FieldValue::Text(value.into()))?;
        self.changed(field);
        Ok(())
    }

    /// Selection event for a categorical field. `code` must be one of the
    /// field's option codes.
    pub fn select(&mut self, field: FieldName, code: i64) -> Result<(), FormError> {
        let options = options_for(field).ok_or(FormError::NotCategorical(field))?;
        if find_option(options, code).is_none() {
            return Err(FormError::UnknownOption { field, code });
        }
        self.input.set(field, FieldValue::Code(code))?;
        self.changed(field);
        Ok(())
    }

    /// Change event carrying only strings, as from a command line or query
    /// string. Categorical values are parsed as option codes.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let field: FieldName = name.parse()?;
        if field.is_categorical() {
            let code = raw.trim().parse::<i64>().map_err(|_| FormError::InvalidCode {
                field,
                raw: raw.to_string(),
            })?;
            self.select(field, code)
        } else {
            self.set_text(field, raw)
        }
    }

    /// Apply every value present in `input` as a change event. All or
    /// nothing: if any value is rejected the form is left as it was.
    pub fn apply(&mut self, input: FormInput) -> Result<(), FormError> {
        let mut staged = self.clone();
        for field in FieldName::ALL {
            match input.get(field) {
                Some(FieldValue::Code(code)) => staged.select(field, code)?,
                Some(FieldValue::Text(text)) => staged.set_text(field, text)?,
                None => {}
            }
        }
        *self = staged;
        Ok(())
    }

    fn changed(&mut self, field: FieldName) {
        self.state = FormState::Editing;

        if self.submit_count == 0 || self.revalidate != RevalidateMode::OnChange {
            return;
        }
        match validate_field(field, self.input.get(field).as_ref()) {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(error) => {
                debug!(field = %field, message = %error.message, "field revalidated");
                self.errors.insert(error);
            }
        }
    }

    /// Validate every field. On success the record is stored, handed to
    /// `sink` once and returned; on failure the errors replace the ones on
    /// display and the raw input is left as it was.
    pub fn submit<S>(&mut self, sink: &mut S) -> ValidationResult
    where
        S: SubmissionSink + ?Sized,
    {
        self.submit_count = self.submit_count.saturating_add(1);
        let result = validate_all(&self.input);

        match &result {
            ValidationResult::Valid(record) => {
                self.errors.clear();
                self.state = FormState::Submitted;
                self.submitted = Some(record.clone());
                sink.observe(record);
            }
            ValidationResult::Invalid(errors) => {
                debug!(
                    attempt = self.submit_count,
                    failed = errors.len(),
                    "submission rejected"
                );
                self.errors = errors.clone();
                self.state = FormState::Editing;
            }
        }

        result
    }

    /// Clear every field and error. The last submitted record stays.
    pub fn reset(&mut self) {
        self.input = FormInput::new();
        self.errors.clear();
        self.state = FormState::Editing;
        self.submit_count = 0;
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Record from the most recent successful submission
    pub fn submitted(&self) -> Option<&FormRecord> {
        self.submitted.as_ref()
    }

    pub fn value(&self, field: FieldName) -> Option<FieldValue> {
        self.input.get(field)
    }

    /// Every field with its schema and current value
    pub fn fields(&self) -> Vec<Field> {
        schema()
            .iter()
            .map(|spec| Field {
                name: spec.name,
                kind: spec.kind,
                required: spec.required,
                value: self.input.get(spec.name),
            })
            .collect()
    }

    pub fn context(&self) -> FormContext {
        let values: BTreeMap<FieldName, String> = FieldName::ALL
            .iter()
            .filter_map(|field| self.input.get(*field).map(|value| (*field, value.to_string())))
            .collect();
        FormContext::new(self.errors.clone(), values)
    }
}
