use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use company_form::{schema, OutputFormat};
use serde_json::json;

pub fn execute(format: OutputFormat) -> Result<ExitCode> {
    match format {
        OutputFormat::Json => {
            let fields: Vec<_> = schema()
                .iter()
                .map(|spec| {
                    let attrs = spec.attrs();
                    json!({
                        "name": spec.name,
                        "label": attrs.label,
                        "required": spec.required,
                        "attrs": attrs.html5_attrs,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        OutputFormat::Pretty => {
            for spec in schema() {
                let attrs = spec.attrs();
                println!(
                    "{:<18} {:<8} {}",
                    spec.name.to_string().cyan(),
                    attrs.label.bold(),
                    attrs.render_html5_attrs()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
