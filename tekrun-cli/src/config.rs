//! Configuration module
//!
//! Handles CLI configuration gathered from flags and environment variables.

use clap::ValueEnum;

/// Format used when printing manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Format of printed manifests
    pub output: OutputFormat,

    /// Service account applied when a command does not name one
    pub service_account: Option<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(account) = &self.service_account {
            if account.trim().is_empty() {
                anyhow::bail!("service_account cannot be empty");
            }
        }
        Ok(())
    }
}
