// File: src/input.rs
// Purpose: Raw snapshot of all field values as entered, before validation

use serde::Deserialize;

use crate::error::FormError;
use crate::field::{FieldName, FieldValue};

/// Raw values of all six fields. `None` means the field was never touched.
///
/// Deserializes from a map keyed by wire name (`companyType = 1`), so an
/// input file may omit any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormInput {
    pub name: Option<String>,
    pub company_type: Option<i64>,
    pub company_purpose: Option<i64>,
    pub client_phone_first: Option<String>,
    pub client_phone_second: Option<String>,
    pub client_email: Option<String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<FieldValue> {
        match field {
            FieldName::Name => self.name.clone().map(FieldValue::Text),
            FieldName::CompanyType => self.company_type.map(FieldValue::Code),
            FieldName::CompanyPurpose => self.company_purpose.map(FieldValue::Code),
            FieldName::ClientPhoneFirst => self.client_phone_first.clone().map(FieldValue::Text),
            FieldName::ClientPhoneSecond => self.client_phone_second.clone().map(FieldValue::Text),
            FieldName::ClientEmail => self.client_email.clone().map(FieldValue::Text),
        }
    }

    /// Store a value, checking it has the right kind for the field.
    ///
    /// Codes are not checked against the option lists here; that is the
    /// job of the selection event on `Form`.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        match value {
            FieldValue::Code(code) => match field {
                FieldName::CompanyType => self.company_type = Some(code),
                FieldName::CompanyPurpose => self.company_purpose = Some(code),
                _ => return Err(FormError::NotCategorical(field)),
            },
            FieldValue::Text(text) => match field {
                FieldName::Name => self.name = Some(text),
                FieldName::ClientPhoneFirst => self.client_phone_first = Some(text),
                FieldName::ClientPhoneSecond => self.client_phone_second = Some(text),
                FieldName::ClientEmail => self.client_email = Some(text),
                FieldName::CompanyType | FieldName::CompanyPurpose => {
                    return Err(FormError::NotText(field));
                }
            },
        }
        Ok(())
    }
}
