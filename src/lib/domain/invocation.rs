//! The records produced by measuring one target with an external tool

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The size metrics computed over the output of a successful invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMetrics {
    /// Size in bytes of the syntax tree once re-serialized as pretty printed JSON
    Ast { json_bytes: u64 },
    /// Size in bytes of the generated tag file and the number of tags (lines) on it
    Tags { file_bytes: u64, tag_count: u64 },
}

/// How an invocation of an external tool ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(OutputMetrics),
    /// The tool exited with a non-zero status, or it couldn't even be launched.
    /// `status` is [`None`] when there's no exit code to report
    ToolError {
        status: Option<i32>,
        stderr: String,
    },
    /// The tool exited successfully, but its output isn't what was expected
    ParseError { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success(_) => OutcomeKind::Success,
            Outcome::ToolError { .. } => OutcomeKind::ToolError,
            Outcome::ParseError { .. } => OutcomeKind::ParseError,
        }
    }
}

/// Fieldless mirror of [`Outcome`], handy for tallies and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    ToolError,
    ParseError,
}

impl OutcomeKind {
    pub fn as_static_str(&self) -> &'static str {
        match *self {
            OutcomeKind::Success => "success",
            OutcomeKind::ToolError => "tool_error",
            OutcomeKind::ParseError => "parse_error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_static_str())
    }
}

/// The outcome record of running the harness against one target.
///
/// It's created once per attempted target and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    target: PathBuf,
    elapsed: Duration,
    outcome: Outcome,
}

impl InvocationResult {
    pub fn new(target: PathBuf, elapsed: Duration, outcome: Outcome) -> Self {
        Self {
            target,
            elapsed,
            outcome,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// What `measure` hands back for a target: either the tool was invoked,
/// or the target didn't exist and nothing was launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Measurement {
    Attempted(InvocationResult),
    NotFound(PathBuf),
}

impl Measurement {
    pub fn result(&self) -> Option<&InvocationResult> {
        match self {
            Measurement::Attempted(result) => Some(result),
            Measurement::NotFound(_) => None,
        }
    }
}
