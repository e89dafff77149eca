mod commands;
mod environment;
mod error;
mod output;
mod session;
mod viewport;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::{Commands, Settings};
use crate::error::CliError;
use crate::output::OutputFormat;

const LOG_ENV: &str = "PINDEP_LOG";

#[derive(Parser)]
#[command(name = "pindep")]
#[command(version = env!("PINDEP_VERSION"))]
#[command(about = "Dependency pinning tool using semantic versioning", long_about = None)]
#[command(
    after_help = "A tool to help you correctly pin your dependencies according to Semantic Versioning (https://semver.org/)."
)]
struct Cli {
    /// Output format
    #[arg(long, short = 'f', value_enum, global = true, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Terminal width in columns (default: detected)
    #[arg(long, global = true)]
    width: Option<u16>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let settings = Settings {
        format: cli.format,
        width: cli.width,
    };
    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Err(e) = command.execute(&settings) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
