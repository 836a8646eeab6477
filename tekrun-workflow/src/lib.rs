//! Tekrun Workflow
//!
//! Behavior layer over a single pipeline run descriptor. The scheduling
//! controller uses it to derive fresh runs from stored templates, override
//! their parameters and link them to the schedule that created them; the
//! status-reporting path uses it to classify runs and locate their artifacts.
//!
//! A [`Workflow`] is bound to one descriptor at a time and holds no
//! synchronization of its own: callers serialize mutations per run.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use tekrun_core::domain::pipeline_run::{Param, PipelineRun};
//! use tekrun_workflow::Workflow;
//!
//! let mut template = PipelineRun::default();
//! template.metadata.name = "nightly-train".to_string();
//! template.spec.params.push(Param::string("lr", "0.1"));
//!
//! let mut run = Workflow::new(template).spec_only_clone();
//! run.override_parameters(&HashMap::from([("lr".to_string(), "0.01".to_string())]));
//!
//! assert_eq!(run.get().metadata.generate_name, "nightly-train");
//! assert_eq!(run.parameters_as_map()["lr"], "0.01");
//! ```

pub mod error;
mod identity;
mod params;
mod provenance;
mod state;
pub mod substitute;
#[cfg(test)]
mod test_support;
mod workflow;

pub use error::{Result, WorkflowError};
pub use state::TerminalReason;
pub use substitute::{SubstitutionStrategy, TextSubstitution};
pub use workflow::Workflow;
