//! Measures the generation of tag files with Universal `ctags`

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{eyre::Context, Result};

use super::{Detail, Tool};
use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::commands::command_line::{CapturedOutput, ToolCommand};
use crate::domain::invocation::OutputMetrics;
use crate::utils::{
    constants::{defaults, error_messages},
    fs::count_lines,
};

/// Runs a recursive `ctags` over a project directory. The tool writes the tags
/// to [`TagsTool::output`] as a side effect, which is read back to measure it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsTool {
    pub program: String,
    pub output: PathBuf,
    pub excludes: Vec<String>,
    pub fields: String,
    pub extras: String,
}

impl TagsTool {
    pub fn new<P: Into<String>>(program: P, output: PathBuf) -> Self {
        Self {
            program: program.into(),
            output,
            excludes: defaults::TAGS_EXCLUDES.iter().map(|e| e.to_string()).collect(),
            fields: defaults::TAGS_FIELDS.to_string(),
            extras: defaults::TAGS_EXTRAS.to_string(),
        }
    }
}

impl Tool for TagsTool {
    fn name(&self) -> &str {
        "tags"
    }

    fn describe(&self, target: &Path) -> Vec<Detail> {
        vec![
            Detail::new("Project", target.display().to_string()),
            Detail::new("Tags file", self.output.display().to_string()),
        ]
    }

    /// Removes the tags file of a previous run, if any, so it can't be measured
    /// as if it were produced by this one
    fn prepare(&self, _target: &Path) -> Result<()> {
        if self.output.exists() {
            log::debug!("Removing the stale tags file: {:?}", self.output);
            fs::remove_file(&self.output).with_context(|| {
                format!(
                    "{}: {:?}",
                    error_messages::FAILURE_REMOVING_STALE_OUTPUT,
                    self.output
                )
            })?;
        }
        Ok(())
    }

    fn command_line<'a>(&'a self, target: &'a Path) -> ToolCommand<'a> {
        let mut args = Arguments::with_capacity(5 + self.excludes.len());
        args.create_and_push("-R");
        args.create_and_push(format!("--fields={}", self.fields));
        args.create_and_push(format!("--extras={}", self.extras));
        args.extend(
            self.excludes
                .iter()
                .map(|dir| Argument::from(format!("--exclude={dir}"))),
        );
        let mut output_flag = OsString::from("-f");
        output_flag.push(&self.output);
        args.create_and_push(output_flag);
        args.create_and_push(target);

        ToolCommand::new(self.program.as_str(), args)
    }

    /// A missing tags file after a successful run means no tags at all
    fn inspect(&self, _target: &Path, _output: &CapturedOutput) -> Result<OutputMetrics, String> {
        if !self.output.exists() {
            log::info!("No tags file was generated at: {:?}", self.output);
            return Ok(OutputMetrics::Tags {
                file_bytes: 0,
                tag_count: 0,
            });
        }

        let contents = fs::read(&self.output)
            .map_err(|e| format!("Could not read the tags file {:?}: {e}", self.output))?;

        Ok(OutputMetrics::Tags {
            file_bytes: contents.len() as u64,
            tag_count: count_lines(&contents),
        })
    }
}
