mod commands;
mod input_file;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use company_form::config::DEFAULT_CONFIG_PATH;
use company_form::{FormConfig, FormInput, OutputFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "company-form")]
#[command(version, about = "Company form - fill in fields, validate and submit", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the options of the categorical fields
    Options,

    /// Describe every field with its rendering attributes
    Fields,

    /// Fill in the form and submit it
    Submit(SubmitArgs),

    /// Validate a single field value
    Check {
        /// Field name (e.g. clientEmail)
        field: String,

        /// Raw value; option code for categorical fields
        value: String,
    },
}

#[derive(Args)]
pub struct SubmitArgs {
    /// TOML or JSON file of fieldName = value pairs, applied before the flags
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    /// Company type option code
    #[arg(long)]
    company_type: Option<i64>,

    /// Company purpose option code
    #[arg(long)]
    company_purpose: Option<i64>,

    #[arg(long = "phone-first")]
    client_phone_first: Option<String>,

    #[arg(long = "phone-second")]
    client_phone_second: Option<String>,

    #[arg(long = "email")]
    client_email: Option<String>,
}

impl SubmitArgs {
    /// Values given as flags
    pub fn flag_input(&self) -> FormInput {
        FormInput {
            name: self.name.clone(),
            company_type: self.company_type,
            company_purpose: self.company_purpose,
            client_phone_first: self.client_phone_first.clone(),
            client_phone_second: self.client_phone_second.clone(),
            client_email: self.client_email.clone(),
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    /// Human-readable, colored
    Pretty,
    /// One JSON document on stdout
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = FormConfig::load(&cli.config)?;
    init_tracing(&config.logging.filter);
    debug!(path = ?cli.config, revalidate = ?config.form.revalidate, "configuration loaded");

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);

    match cli.command {
        Commands::Options => commands::options::execute(format),
        Commands::Fields => commands::fields::execute(format),
        Commands::Submit(args) => commands::submit::execute(&args, &config, format),
        Commands::Check { field, value } => commands::check::execute(&field, &value, format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
