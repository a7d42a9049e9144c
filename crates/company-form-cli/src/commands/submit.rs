use std::process::ExitCode;

use anyhow::{Context, Result};
use company_form::{Form, FormConfig, OutputFormat, TracingSink};

use crate::{input_file, render, SubmitArgs};

pub fn execute(args: &SubmitArgs, config: &FormConfig, format: OutputFormat) -> Result<ExitCode> {
    let mut form = Form::with_config(config);

    if let Some(path) = &args.input {
        let input = input_file::load(path)?;
        form.apply(input)
            .with_context(|| format!("Rejected value in input file: {:?}", path))?;
    }
    form.apply(args.flag_input())
        .context("Rejected value on the command line")?;

    let result = form.submit(&mut TracingSink);
    print!("{}", render::submission(&form, &result, format)?);

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
