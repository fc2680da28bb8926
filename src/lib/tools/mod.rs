//! The external tools that can be measured.
//!
//! Every tool is described by the same capability set: how to launch it for a
//! given target, what must be done before launching it, and how to validate and
//! measure what it produced. The timing harness is generic over it, so the
//! measurement logic is written once for all of them

pub mod syntax_tree;
pub mod tags;

use std::fmt;
use std::path::Path;

use color_eyre::Result;

use crate::domain::commands::command_line::{CapturedOutput, ToolCommand};
use crate::domain::invocation::OutputMetrics;

pub use syntax_tree::SyntaxTreeTool;
pub use tags::TagsTool;

/// A label/value pair reported about a target right before measuring it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

impl Detail {
    pub fn new<V: Into<String>>(label: &'static str, value: V) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

pub trait Tool {
    /// Human readable name of the tool, used in the reports
    fn name(&self) -> &str;

    /// Information about the target worth showing before the tool runs
    fn describe(&self, target: &Path) -> Vec<Detail>;

    /// Work to be done before launching the tool. Not accounted in the measured time
    fn prepare(&self, _target: &Path) -> Result<()> {
        Ok(())
    }

    /// The command line that runs the tool against `target`
    fn command_line<'a>(&'a self, target: &'a Path) -> ToolCommand<'a>;

    /// Validates the output of a successful run and computes its size metrics.
    /// An [`Err`] carries the reason why the output isn't well-formed
    fn inspect(&self, target: &Path, output: &CapturedOutput) -> Result<OutputMetrics, String>;
}

/// Formats a byte count with thousands separators, e.g. `12,345`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
