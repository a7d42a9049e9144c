use anyhow::Result;
use colored::Colorize;
use company_form::options::label_for;
use company_form::{spec_for, FieldName, FieldValue, Form, OutputFormat, ValidationResult};
use serde_json::json;

/// Display form of a value; codes carry their option label when one exists
pub fn display_value(field: FieldName, value: &FieldValue) -> String {
    match value {
        FieldValue::Code(code) => match label_for(field, *code) {
            Some(label) => format!("{} ({})", code, label),
            None => code.to_string(),
        },
        FieldValue::Text(text) if text.is_empty() => "(empty)".to_string(),
        FieldValue::Text(text) => text.clone(),
    }
}

pub fn submission(form: &Form, result: &ValidationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => submission_json(result),
        OutputFormat::Pretty => Ok(submission_pretty(form, result)),
    }
}

fn submission_json(result: &ValidationResult) -> Result<String> {
    let value = match result {
        ValidationResult::Valid(record) => json!({ "submitted": true, "record": record }),
        ValidationResult::Invalid(errors) => json!({ "submitted": false, "errors": errors }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn submission_pretty(form: &Form, result: &ValidationResult) -> String {
    let mut out = String::new();

    match result {
        ValidationResult::Valid(record) => {
            out.push_str(&format!("{}\n\n", "Form submitted".green().bold()));
            for (field, value) in record.iter() {
                out.push_str(&format!(
                    "  {:<10} {}\n",
                    spec_for(field).label,
                    display_value(field, &value)
                ));
            }
        }
        ValidationResult::Invalid(errors) => {
            out.push_str(&format!(
                "{} ({} field{})\n\n",
                "Submission failed".red().bold(),
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            let context = form.context();
            for field in FieldName::ALL {
                let value = form
                    .value(field)
                    .map(|v| display_value(field, &v))
                    .unwrap_or_else(|| "(not set)".to_string());
                let line = format!("  {:<10} {}", spec_for(field).label, value);
                match context.get_error(field) {
                    Some(message) => {
                        out.push_str(&format!("{}  {}\n", line, message.red()));
                    }
                    None => {
                        out.push_str(&line);
                        out.push('\n');
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use company_form::MemorySink;

    #[test]
    fn test_display_value() {
        assert_eq!(
            display_value(FieldName::CompanyType, &FieldValue::Code(2)),
            "2 (Government)"
        );
        assert_eq!(display_value(FieldName::CompanyPurpose, &FieldValue::Code(2)), "2");
        assert_eq!(display_value(FieldName::ClientEmail, &"".into()), "(empty)");
        assert_eq!(display_value(FieldName::Name, &"Acme".into()), "Acme");
    }

    #[test]
    fn test_json_errors() {
        let mut form = Form::new();
        form.set_text(FieldName::Name, "Acme").unwrap();
        form.select(FieldName::CompanyType, 1).unwrap();
        let result = form.submit(&mut MemorySink::new());

        let out = submission(&form, &result, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["submitted"], json!(false));
        assert_eq!(parsed["errors"], json!({ "companyPurpose": "Required" }));
    }

    #[test]
    fn test_json_record() {
        let mut form = Form::new();
        form.set_text(FieldName::Name, "Acme").unwrap();
        form.select(FieldName::CompanyType, 1).unwrap();
        form.select(FieldName::CompanyPurpose, 3).unwrap();
        let result = form.submit(&mut MemorySink::new());

        let out = submission(&form, &result, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["submitted"], json!(true));
        assert_eq!(parsed["record"]["companyPurpose"], json!(3));
        assert_eq!(parsed["record"]["clientEmail"], json!(""));
    }

    #[test]
    fn test_pretty_lists_every_field() {
        let mut form = Form::new();
        form.set_text(FieldName::ClientEmail, "bad-email").unwrap();
        let result = form.submit(&mut MemorySink::new());

        let out = submission(&form, &result, OutputFormat::Pretty).unwrap();
        assert!(out.contains("Invalid format email"));
        assert!(out.contains("(not set)"));
        assert_eq!(out.lines().filter(|l| l.starts_with("  ")).count(), 6);
    }
}
