//! Prepare command handler
//!
//! Derives a fresh, submission-ready run from a stored template the way the
//! scheduling controller does before handing it to the control plane.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::HashMap;
use tekrun_core::domain::pipeline_run::PipelineRun;
use tekrun_core::domain::scheduled_workflow::ScheduledWorkflowRef;
use tekrun_workflow::Workflow;
use uuid::Uuid;

use crate::config::Config;
use crate::manifest;

/// Arguments of the prepare command
#[derive(Args, Debug, Default)]
pub struct PrepareArgs {
    /// Template manifest path, or - for stdin
    pub file: String,

    /// Explicit run name (default: generated from the template name)
    #[arg(long)]
    pub name: Option<String>,

    /// Parameter override as name=value; undeclared names are ignored
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Service account to run as
    #[arg(long)]
    pub service_account: Option<String>,

    /// Run identifier substituted into the template (default: a new UUID)
    #[arg(long)]
    pub run_id: Option<String>,

    /// Name of the owning scheduled workflow
    #[arg(long, requires_all = ["scheduler_uid", "epoch", "index"])]
    pub scheduler_name: Option<String>,

    /// UID of the owning scheduled workflow
    #[arg(long, requires = "scheduler_name")]
    pub scheduler_uid: Option<String>,

    /// Scheduled time in Unix seconds
    #[arg(long, requires = "scheduler_name")]
    pub epoch: Option<i64>,

    /// Sequence index of the run within its schedule
    #[arg(long, requires = "scheduler_name")]
    pub index: Option<i64>,

    /// Name of the run this one is derived from
    #[arg(long)]
    pub original_name: Option<String>,
}

/// Handle the prepare command
pub fn handle_prepare_command(args: PrepareArgs, config: &Config) -> Result<()> {
    let template = manifest::load(&args.file)?;
    let run = prepare(template, &args, config)?;
    println!("{}", manifest::render(&run, config.output)?);
    Ok(())
}

/// Build a submission-ready run from `template`
fn prepare(template: PipelineRun, args: &PrepareArgs, config: &Config) -> Result<PipelineRun> {
    let mut workflow = Workflow::new(template).spec_only_clone();

    let desired: HashMap<String, String> = args.params.iter().cloned().collect();
    workflow.verify_parameters(&desired);
    workflow.override_parameters(&desired);

    if let Some(account) = args
        .service_account
        .as_ref()
        .or(config.service_account.as_ref())
    {
        workflow.set_service_account(account.as_str());
    }

    if let Some(name) = &args.name {
        workflow.override_name(name.as_str());
    }

    if let Some(scheduler_name) = &args.scheduler_name {
        let schedule = ScheduledWorkflowRef::new(
            scheduler_name.as_str(),
            args.scheduler_uid.clone().unwrap_or_default(),
        );
        workflow.set_owner_reference(&schedule);
        workflow.set_canonical_labels(
            scheduler_name,
            args.epoch.unwrap_or_default(),
            args.index.unwrap_or_default(),
        );
    }

    let run_id = args
        .run_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    workflow
        .replace_uid(&run_id)
        .with_context(|| format!("Failed to substitute run id {}", run_id))?;
    workflow.set_run_id_label(run_id.as_str());

    if let Some(original) = &args.original_name {
        workflow
            .replace_original_run_name(original)
            .with_context(|| format!("Failed to substitute original run name {}", original))?;
    }

    tracing::info!(
        "Prepared run {} with {} parameter(s)",
        run_id,
        workflow.get().spec.params.len()
    );

    Ok(workflow.into_inner())
}

/// Parse a `name=value` pair
fn parse_key_val(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("invalid name=value pair: no '=' found in {:?}", input))?;
    if key.is_empty() {
        return Err(format!("invalid name=value pair: empty name in {:?}", input));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tekrun_core::keys::{LABEL_RUN_ID, LABEL_WORKFLOW_EPOCH};

    fn template() -> PipelineRun {
        serde_json::from_value(json!({
            "apiVersion": "tekton.dev/v1",
            "kind": "PipelineRun",
            "metadata": { "name": "nightly-train", "uid": "old-uid", "resourceVersion": "9" },
            "spec": {
                "params": [
                    { "name": "lr", "value": "0.1" },
                    { "name": "run", "value": "$(context.pipelineRun.uid)" },
                    { "name": "origin", "value": "$ORIG_PR_NAME" }
                ]
            },
            "status": { "conditions": [ { "type": "Succeeded", "status": "True", "reason": "Succeeded" } ] }
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("lr=0.1").unwrap(),
            ("lr".to_string(), "0.1".to_string())
        );
        assert_eq!(
            parse_key_val("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_key_val("empty=").unwrap().1, "");
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn test_prepare_minimal() {
        let args = PrepareArgs {
            run_id: Some("run-42".to_string()),
            ..Default::default()
        };
        let run = prepare(template(), &args, &Config::default()).unwrap();

        assert_eq!(run.metadata.name, "");
        assert_eq!(run.metadata.generate_name, "nightly-train");
        assert_eq!(run.metadata.uid, "");
        assert!(run.status.is_empty());
        assert_eq!(run.metadata.label(LABEL_RUN_ID), Some("run-42"));

        let workflow = Workflow::new(run);
        assert_eq!(workflow.parameters_as_map()["run"], "run-42");
        assert!(!workflow.has_scheduled_workflow_parent());
    }

    #[test]
    fn test_prepare_full() {
        let args = PrepareArgs {
            name: Some("nightly-train-7".to_string()),
            params: vec![
                ("lr".to_string(), "0.01".to_string()),
                ("unknown".to_string(), "x".to_string()),
            ],
            run_id: Some("run-42".to_string()),
            scheduler_name: Some("nightly".to_string()),
            scheduler_uid: Some("abc-123".to_string()),
            epoch: Some(1_700_000_000),
            index: Some(7),
            original_name: Some("nightly-train-6".to_string()),
            ..Default::default()
        };
        let config = Config {
            service_account: Some("pipeline-runner".to_string()),
            ..Default::default()
        };

        let run = prepare(template(), &args, &config).unwrap();
        let workflow = Workflow::new(run);
        let params = workflow.parameters_as_map();

        assert_eq!(workflow.name(), "nightly-train-7");
        assert_eq!(workflow.get().metadata.generate_name, "");
        assert_eq!(params.len(), 3);
        assert_eq!(params["lr"], "0.01");
        assert_eq!(params["origin"], "nightly-train-6");
        assert!(!params.contains_key("unknown"));
        assert_eq!(
            workflow.get().spec.task_run_template.service_account_name,
            "pipeline-runner"
        );
        assert_eq!(workflow.scheduled_workflow_uid(), "abc-123");
        assert_eq!(workflow.scheduled_at_in_sec_or_0(), 1_700_000_000);
        assert_eq!(
            workflow.get().metadata.label(LABEL_WORKFLOW_EPOCH),
            Some("1700000000")
        );
    }

    #[test]
    fn test_prepare_command_line_account_wins() {
        let args = PrepareArgs {
            service_account: Some("explicit".to_string()),
            run_id: Some("run-1".to_string()),
            ..Default::default()
        };
        let config = Config {
            service_account: Some("default".to_string()),
            ..Default::default()
        };
        let run = prepare(template(), &args, &config).unwrap();
        assert_eq!(run.spec.task_run_template.service_account_name, "explicit");
    }

    #[test]
    fn test_prepare_generates_run_id() {
        let run = prepare(template(), &PrepareArgs::default(), &Config::default()).unwrap();
        let id = run.metadata.label(LABEL_RUN_ID).unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(Workflow::new(run.clone()).parameters_as_map()["run"], id);
    }

    #[test]
    fn test_prepare_rejects_corrupting_run_id() {
        let args = PrepareArgs {
            run_id: Some("bad\"id".to_string()),
            ..Default::default()
        };
        let err = prepare(template(), &args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to substitute run id"));
    }
}
