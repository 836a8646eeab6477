//! Tekrun Core
//!
//! Core types for the pipeline run descriptor layer.
//!
//! This crate contains:
//! - Domain types: the run descriptor document (`PipelineRun`) and its metadata
//! - Well-known label, annotation and placeholder keys
//! - The label-safe integer codec used by scheduling labels

pub mod domain;
pub mod error;
pub mod keys;
pub mod label;

pub use error::{LabelError, Result};
