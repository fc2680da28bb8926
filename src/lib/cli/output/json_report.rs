//! Machine readable dump of a whole run

use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::{eyre::Context, Result};
use serde::Serialize;

use crate::domain::invocation::{InvocationResult, Outcome, OutputMetrics};
use crate::domain::summary::RunSummary;
use crate::utils::{self, constants::error_messages};

#[derive(Debug, Serialize, PartialEq)]
pub struct JsonReport<'a> {
    pub tool: &'a str,
    pub generated_at: DateTime<Utc>,
    pub requested: usize,
    pub attempted: usize,
    pub successful: usize,
    pub failed: usize,
    pub total_secs: f64,
    pub average_secs: f64,
    pub skipped: Vec<&'a Path>,
    pub results: Vec<JsonResult<'a>>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct JsonResult<'a> {
    pub target: &'a Path,
    pub elapsed_secs: f64,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JsonMetrics>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum JsonMetrics {
    Ast { json_bytes: u64 },
    Tags { file_bytes: u64, tag_count: u64 },
}

impl From<OutputMetrics> for JsonMetrics {
    fn from(metrics: OutputMetrics) -> Self {
        match metrics {
            OutputMetrics::Ast { json_bytes } => JsonMetrics::Ast { json_bytes },
            OutputMetrics::Tags {
                file_bytes,
                tag_count,
            } => JsonMetrics::Tags {
                file_bytes,
                tag_count,
            },
        }
    }
}

impl<'a> From<&'a InvocationResult> for JsonResult<'a> {
    fn from(result: &'a InvocationResult) -> Self {
        let (status, error, metrics) = match result.outcome() {
            Outcome::Success(metrics) => (None, None, Some(JsonMetrics::from(*metrics))),
            Outcome::ToolError { status, stderr } => (*status, Some(stderr.as_str()), None),
            Outcome::ParseError { message } => (None, Some(message.as_str()), None),
        };

        Self {
            target: result.target(),
            elapsed_secs: result.elapsed().as_secs_f64(),
            outcome: result.outcome().kind().as_static_str(),
            status,
            error,
            metrics,
        }
    }
}

impl<'a> JsonReport<'a> {
    pub fn new(tool: &'a str, summary: &'a RunSummary, generated_at: DateTime<Utc>) -> Self {
        Self {
            tool,
            generated_at,
            requested: summary.requested(),
            attempted: summary.attempted(),
            successful: summary.successful(),
            failed: summary.failed(),
            total_secs: summary.total_elapsed().as_secs_f64(),
            average_secs: summary.average_secs(),
            skipped: summary.skipped().collect(),
            results: summary.results().iter().map(JsonResult::from).collect(),
        }
    }
}

/// Serializes the report of the run and writes it to `path`
pub fn write(path: &Path, tool: &str, summary: &RunSummary) -> Result<()> {
    let report = JsonReport::new(tool, summary, Utc::now());
    let serialized = serde_json::to_string_pretty(&report)
        .with_context(|| error_messages::FAILURE_SERIALIZING_JSON_REPORT)?;

    utils::fs::create_file(path, serialized.as_bytes())
        .with_context(|| format!("{}: {path:?}", error_messages::FAILURE_WRITING_JSON_REPORT))?;
    log::info!("JSON report written to: {path:?}");
    Ok(())
}
