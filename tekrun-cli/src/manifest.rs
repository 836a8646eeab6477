//! Manifest loading and rendering

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tekrun_core::domain::pipeline_run::PipelineRun;

use crate::config::OutputFormat;

/// Reads a run descriptor from `path`, or from stdin when `path` is `-`
///
/// `.yaml`/`.yml` files are parsed as YAML, anything else as JSON. Stdin is
/// tried as JSON first, then YAML.
pub fn load(path: &str) -> Result<PipelineRun> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read manifest from stdin")?;
        return parse(&text, None);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path))?;
    parse(&text, Some(format_for_path(path)))
        .with_context(|| format!("Failed to parse manifest {}", path))
}

fn format_for_path(path: &str) -> OutputFormat {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => OutputFormat::Yaml,
        _ => OutputFormat::Json,
    }
}

/// Parses manifest text in the given format, or sniffs it when `format` is `None`
pub fn parse(text: &str, format: Option<OutputFormat>) -> Result<PipelineRun> {
    match format {
        Some(OutputFormat::Json) => serde_json::from_str(text).context("Invalid JSON manifest"),
        Some(OutputFormat::Yaml) => serde_yaml::from_str(text).context("Invalid YAML manifest"),
        None => serde_json::from_str(text)
            .or_else(|_| serde_yaml::from_str(text))
            .context("Manifest is neither valid JSON nor valid YAML"),
    }
}

/// Renders a run descriptor for printing
pub fn render(run: &PipelineRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(run).context("Failed to render manifest as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(run).context("Failed to render manifest as YAML"),
    }
}
