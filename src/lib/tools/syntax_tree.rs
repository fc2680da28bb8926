//! Measures the generation of syntax trees with the `tree-sitter` CLI

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::{thousands, Detail, Tool};
use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::commands::command_line::{CapturedOutput, ToolCommand};
use crate::domain::invocation::OutputMetrics;

/// Runs `<program> parse <file> --output-format json` and expects a JSON
/// encoded syntax tree on its standard output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTreeTool {
    pub program: String,
    pub extra_args: Vec<String>,
}

impl SyntaxTreeTool {
    pub fn new<P: Into<String>>(program: P) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }
}

impl Tool for SyntaxTreeTool {
    fn name(&self) -> &str {
        "syntax tree"
    }

    fn describe(&self, target: &Path) -> Vec<Detail> {
        let mut details = vec![Detail::new("File", target.display().to_string())];
        match fs::metadata(target) {
            Ok(metadata) => details.push(Detail::new(
                "File size",
                format!("{} bytes", thousands(metadata.len())),
            )),
            Err(e) => log::debug!("Could not read the metadata of {target:?}: {e}"),
        }
        details
    }

    fn command_line<'a>(&'a self, target: &'a Path) -> ToolCommand<'a> {
        let mut args = Arguments::with_capacity(4 + self.extra_args.len());
        args.create_and_push("parse");
        args.create_and_push(target);
        args.create_and_push("--output-format");
        args.create_and_push("json");
        args.extend(self.extra_args.iter().map(|a| Argument::from(a.as_str())));

        ToolCommand::new(self.program.as_str(), args)
    }

    fn inspect(&self, _target: &Path, output: &CapturedOutput) -> Result<OutputMetrics, String> {
        let tree: Value = serde_json::from_slice(&output.stdout).map_err(|e| e.to_string())?;
        let pretty = serde_json::to_string_pretty(&tree).map_err(|e| e.to_string())?;

        Ok(OutputMetrics::Ast {
            json_bytes: pretty.len() as u64,
        })
    }
}
