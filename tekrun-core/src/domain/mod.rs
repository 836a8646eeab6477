//! Core domain types
//!
//! The run descriptor is a document owned by the pipeline engine. These types
//! model the parts the descriptor layer reads or writes and keep every other
//! field opaque so that nothing authored upstream is lost on a round trip.

pub mod meta;
pub mod pipeline_run;
pub mod scheduled_workflow;
