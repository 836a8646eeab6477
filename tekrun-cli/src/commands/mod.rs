//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod artifact;
mod inspect;
mod prepare;

pub use prepare::PrepareArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show identity, provenance and state of a run
    Inspect {
        /// Manifest path, or - for stdin
        file: String,
    },
    /// Derive a submission-ready run from a stored template
    Prepare(PrepareArgs),
    /// Print the object store key of a node artifact
    ArtifactKey {
        /// Manifest path, or - for stdin
        file: String,
        /// Node that produced the artifact
        node_id: String,
        /// Artifact name
        artifact_name: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Inspect { file } => inspect::handle_inspect_command(&file),
        Commands::Prepare(args) => prepare::handle_prepare_command(args, config),
        Commands::ArtifactKey {
            file,
            node_id,
            artifact_name,
        } => artifact::handle_artifact_key_command(&file, &node_id, &artifact_name),
    }
}
