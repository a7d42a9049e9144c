use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use company_form::FormInput;

/// Read field values from a `.json` file, or TOML for any other extension
pub fn load(path: &Path) -> Result<FormInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let input = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON input file: {:?}", path))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML input file: {:?}", path))?
    };

    Ok(input)
}
