//! Artifact key command handler

use anyhow::Result;
use tekrun_workflow::Workflow;

use crate::manifest;

/// Print the derived artifact key, or an empty line if the run has no child nodes
pub fn handle_artifact_key_command(file: &str, node_id: &str, artifact_name: &str) -> Result<()> {
    let workflow = Workflow::new(manifest::load(file)?);
    println!(
        "{}",
        workflow.find_object_store_artifact_key_or_empty(node_id, artifact_name)
    );
    Ok(())
}
