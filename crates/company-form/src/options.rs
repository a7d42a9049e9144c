// File: src/options.rs
// Purpose: Static option lists for the two categorical fields

use serde::Serialize;

use crate::field::FieldName;

/// Placeholder code meaning "nothing selected yet"
pub const NO_SELECTION: i64 = 0;

/// A label/code pair offered by a categorical field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub label: &'static str,
    pub code: i64,
}

impl CategoryOption {
    pub const fn new(label: &'static str, code: i64) -> Self {
        Self { label, code }
    }

    pub fn is_placeholder(&self) -> bool {
        self.code == NO_SELECTION
    }
}

pub const COMPANY_TYPE_OPTIONS: &[CategoryOption] = &[
    CategoryOption::new("No data", NO_SELECTION),
    CategoryOption::new("Company", 1),
    CategoryOption::new("Government", 2),
    CategoryOption::new("School", 3),
];

// There is no option with code 2.
pub const COMPANY_PURPOSE_OPTIONS: &[CategoryOption] = &[
    CategoryOption::new("No data", NO_SELECTION),
    CategoryOption::new("Demo", 1),
    CategoryOption::new("Sell", 3),
    CategoryOption::new("Test", 4),
];

/// Option list for a categorical field, `None` for text fields
pub fn options_for(field: FieldName) -> Option<&'static [CategoryOption]> {
    match field {
        FieldName::CompanyType => Some(COMPANY_TYPE_OPTIONS),
        FieldName::CompanyPurpose => Some(COMPANY_PURPOSE_OPTIONS),
        _ => None,
    }
}

pub fn find_option(options: &[CategoryOption], code: i64) -> Option<&CategoryOption> {
    options.iter().find(|option| option.code == code)
}

/// Display label for a code of a categorical field
pub fn label_for(field: FieldName, code: i64) -> Option<&'static str> {
    options_for(field)
        .and_then(|options| find_option(options, code))
        .map(|option| option.label)
}
