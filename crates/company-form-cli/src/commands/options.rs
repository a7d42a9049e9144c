use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use company_form::options::options_for;
use company_form::{spec_for, FieldName, OutputFormat};
use serde_json::{json, Map, Value};

const CATEGORICAL: [FieldName; 2] = [FieldName::CompanyType, FieldName::CompanyPurpose];

pub fn execute(format: OutputFormat) -> Result<ExitCode> {
    match format {
        OutputFormat::Json => {
            let mut out = Map::new();
            for field in CATEGORICAL {
                out.insert(field.to_string(), json!(options_for(field).unwrap_or(&[])));
            }
            println!("{}", serde_json::to_string_pretty(&Value::Object(out))?);
        }
        OutputFormat::Pretty => {
            for field in CATEGORICAL {
                println!("{} ({})", spec_for(field).label.bold(), field.to_string().cyan());
                for option in options_for(field).unwrap_or(&[]) {
                    println!("  {:>2}  {}", option.code, option.label);
                }
                println!();
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
