//! Tekrun CLI
//!
//! Command-line interface for preparing and inspecting pipeline run descriptors.
//!
//! Manifests are printed to stdout; logs go to stderr.

mod commands;
mod config;
mod manifest;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tekrun")]
#[command(about = "Pipeline run descriptor tool", long_about = None)]
struct Cli {
    /// Manifest output format
    #[arg(long, value_enum, env = "TEKRUN_OUTPUT", default_value = "json")]
    output: OutputFormat,

    /// Default service account for prepared runs
    #[arg(long, env = "TEKRUN_SERVICE_ACCOUNT")]
    service_account: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tekrun=info,tekrun_workflow=info,tekrun_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        output: cli.output,
        service_account: cli.service_account,
    };
    config.validate()?;

    handle_command(cli.command, &config)
}
