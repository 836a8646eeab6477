//! Inspect command handler
//!
//! Prints what the status-reporting path reads from a run descriptor.

use anyhow::Result;
use colored::*;
use tekrun_workflow::{TerminalReason, Workflow};

use crate::manifest;

/// Load a manifest and print its details
pub fn handle_inspect_command(file: &str) -> Result<()> {
    let workflow = Workflow::new(manifest::load(file)?);
    print_workflow_details(&workflow);
    Ok(())
}

/// Print detailed run information
fn print_workflow_details(workflow: &Workflow) {
    let run = workflow.get();

    println!("{}", "Run Details:".bold());
    if !run.metadata.name.is_empty() {
        println!("  Name:          {}", run.metadata.name.cyan());
    }
    if !run.metadata.generate_name.is_empty() {
        println!("  Generate Name: {}", run.metadata.generate_name.cyan());
    }
    if !run.metadata.namespace.is_empty() {
        println!("  Namespace:     {}", run.metadata.namespace);
    }
    if !run.spec.task_run_template.service_account_name.is_empty() {
        println!(
            "  Service Acct:  {}",
            run.spec.task_run_template.service_account_name
        );
    }

    println!("\n{}", "Schedule:".bold());
    if workflow.has_scheduled_workflow_parent() {
        println!(
            "  Scheduler UID: {}",
            workflow.scheduled_workflow_uid().dimmed()
        );
        println!("  Scheduled At:  {}", workflow.scheduled_at_in_sec_or_0());
    } else {
        println!("  {}", "Not owned by a scheduled workflow".dimmed());
    }

    println!("\n{}", "State:".bold());
    println!("  Condition:     {}", colorize_condition(workflow.condition()));
    match run.status.completion_time {
        Some(completed) if workflow.is_finished() => {
            println!("  Finished:      {}", completed.format("%Y-%m-%d %H:%M:%S"))
        }
        _ => println!("  Finished:      {}", "no".dimmed()),
    }
    println!("  Final:         {}", yes_no(workflow.is_in_final_state()));
    println!("  Persisted:     {}", yes_no(workflow.persisted_final_state()));
    println!("  V2 Compatible: {}", yes_no(workflow.is_v2_compatible()));

    let mut params: Vec<_> = workflow.parameters_as_map().into_iter().collect();
    if !params.is_empty() {
        params.sort();
        println!("\n{}", "Parameters:".bold());
        for (key, value) in params {
            println!("  {} = {}", key.cyan(), value);
        }
    }
}

/// Colorize the condition reason for display
fn colorize_condition(reason: &str) -> ColoredString {
    match TerminalReason::from_reason(reason) {
        Some(terminal @ (TerminalReason::Succeeded | TerminalReason::Completed)) => {
            terminal.to_string().green()
        }
        Some(terminal) => terminal.to_string().red(),
        None if reason.is_empty() => "-".dimmed(),
        None => reason.cyan(),
    }
}

fn yes_no(value: bool) -> ColoredString {
    if value { "✓".green() } else { "✗".dimmed() }
}
