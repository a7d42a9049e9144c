// File: src/field.rs
// Purpose: Field identities, kinds and values, plus rendering hints for a form surface

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use company_form_validation::{is_valid_email, is_valid_phone, EMAIL_PATTERN, PHONE_PATTERN};
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::options::CategoryOption;

/// The six fields of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    CompanyType,
    CompanyPurpose,
    ClientPhoneFirst,
    ClientPhoneSecond,
    ClientEmail,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::CompanyType,
        FieldName::CompanyPurpose,
        FieldName::ClientPhoneFirst,
        FieldName::ClientPhoneSecond,
        FieldName::ClientEmail,
    ];

    /// Wire name, as used in error maps and logged records
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::CompanyType => "companyType",
            FieldName::CompanyPurpose => "companyPurpose",
            FieldName::ClientPhoneFirst => "clientPhoneFirst",
            FieldName::ClientPhoneSecond => "clientPhoneSecond",
            FieldName::ClientEmail => "clientEmail",
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, FieldName::CompanyType | FieldName::CompanyPurpose)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A raw field value: free text, or a selected option code (0 = no selection)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Code(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Code(_) => None,
        }
    }

    pub fn as_code(&self) -> Option<i64> {
        match self {
            FieldValue::Code(code) => Some(*code),
            FieldValue::Text(_) => None,
        }
    }

    /// Empty text; whitespace counts as content. A code is never empty,
    /// even the placeholder 0.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Code(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Code(value)
    }
}

/// Text patterns a field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Phone,
    Email,
}

impl Pattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Phone => is_valid_phone(value),
            Pattern::Email => is_valid_email(value),
        }
    }

    /// Regex source, for rendering surfaces that validate client-side
    pub fn source(&self) -> &'static str {
        match self {
            Pattern::Phone => PHONE_PATTERN,
            Pattern::Email => EMAIL_PATTERN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    FreeText,
    Categorical(&'static [CategoryOption]),
    PatternText(Pattern),
}

/// One field as currently held by a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub kind: FieldKind,
    pub required: bool,
    /// `None` until the first change event
    pub value: Option<FieldValue>,
}

/// Rendering hints for a field: label plus HTML5-style attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// Field label for display
    pub label: String,
    /// Native attributes (e.g., "required", "maxlength", "type")
    pub html5_attrs: BTreeMap<String, String>,
}

impl FieldAttrs {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            html5_attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.html5_attrs.insert(key.to_string(), value.into());
        self
    }

    /// Render attributes as a string; valueless attributes render bare
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
