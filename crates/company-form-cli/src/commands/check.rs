use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use company_form::{validate_field, FieldName, FieldValue, FormError, OutputFormat};
use serde_json::json;

pub fn execute(field: &str, raw: &str, format: OutputFormat) -> Result<ExitCode> {
    let field: FieldName = field.parse()?;
    let value = parse_value(field, raw).context("Cannot check value")?;
    let result = validate_field(field, Some(&value));

    match format {
        OutputFormat::Json => {
            let out = json!({
                "field": field,
                "valid": result.is_ok(),
                "message": result.as_ref().err().map(|e| e.message.as_str()),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Pretty => match &result {
            Ok(()) => println!("{} {}", "✓".green().bold(), field),
            Err(e) => println!("{} {}: {}", "✗".red().bold(), field, e.message.red()),
        },
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Categorical fields take a code; any code is checked, listed or not
fn parse_value(field: FieldName, raw: &str) -> Result<FieldValue, FormError> {
    if field.is_categorical() {
        raw.trim()
            .parse::<i64>()
            .map(FieldValue::Code)
            .map_err(|_| FormError::InvalidCode {
                field,
                raw: raw.to_string(),
            })
    } else {
        Ok(FieldValue::Text(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categorical() {
        assert_eq!(
            parse_value(FieldName::CompanyPurpose, "2"),
            Ok(FieldValue::Code(2))
        );
        assert!(parse_value(FieldName::CompanyType, "School").is_err());
    }

    #[test]
    fn test_parse_text_keeps_whitespace() {
        assert_eq!(
            parse_value(FieldName::Name, " Acme "),
            Ok(FieldValue::Text(" Acme ".to_string()))
        );
    }
}
