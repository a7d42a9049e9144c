// File: src/record.rs
// Purpose: Normalized snapshot of a successful submission

use serde::Serialize;

use crate::field::{FieldName, FieldValue};
use crate::input::FormInput;
use crate::options::NO_SELECTION;

/// All six values at submission time. Every key is always present.
///
/// Serializes as a JSON object with wire names in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub company_type: i64,
    pub company_purpose: i64,
    pub client_phone_first: String,
    pub client_phone_second: String,
    pub client_email: String,
}

impl FormRecord {
    /// Build a record from raw input, turning untouched text fields into `""`.
    ///
    /// Untouched categorical fields become the placeholder code, though
    /// validated input never has them.
    pub fn normalize(input: &FormInput) -> Self {
        Self {
            name: input.name.clone().unwrap_or_default(),
            company_type: input.company_type.unwrap_or(NO_SELECTION),
            company_purpose: input.company_purpose.unwrap_or(NO_SELECTION),
            client_phone_first: input.client_phone_first.clone().unwrap_or_default(),
            client_phone_second: input.client_phone_second.clone().unwrap_or_default(),
            client_email: input.client_email.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Name => FieldValue::Text(self.name.clone()),
            FieldName::CompanyType => FieldValue::Code(self.company_type),
            FieldName::CompanyPurpose => FieldValue::Code(self.company_purpose),
            FieldName::ClientPhoneFirst => FieldValue::Text(self.client_phone_first.clone()),
            FieldName::ClientPhoneSecond => FieldValue::Text(self.client_phone_second.clone()),
            FieldName::ClientEmail => FieldValue::Text(self.client_email.clone()),
        }
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldValue)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_fills_untouched_text() {
        let input = FormInput {
            name: Some("Acme".to_string()),
            company_type: Some(1),
            company_purpose: Some(4),
            ..FormInput::default()
        };
        let record = FormRecord::normalize(&input);
        assert_eq!(
            record,
            FormRecord {
                name: "Acme".to_string(),
                company_type: 1,
                company_purpose: 4,
                client_phone_first: String::new(),
                client_phone_second: String::new(),
                client_email: String::new(),
            }
        );
    }

    #[test]
    fn test_iter_has_every_field_once() {
        let record = FormRecord::default();
        let fields: Vec<FieldName> = record.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, FieldName::ALL.to_vec());
    }

    #[test]
    fn test_json_shape() {
        let record = FormRecord {
            name: "Acme".to_string(),
            company_type: 1,
            company_purpose: 3,
            client_phone_first: "02-1234-5678".to_string(),
            ..FormRecord::default()
        };
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"name":"Acme","companyType":1,"companyPurpose":3,"clientPhoneFirst":"02-1234-5678","clientPhoneSecond":"","clientEmail":""}"#
        );
    }
}
