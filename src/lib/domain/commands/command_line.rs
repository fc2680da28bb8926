//! The command line of one external tool invocation, and what the process left
//! behind once it finished

use std::fmt;
use std::process::Output;

use super::arguments::Arguments;

/// A ready to spawn external command: the program to launch plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand<'a> {
    pub program: String,
    pub args: Arguments<'a>,
}

impl<'a> ToolCommand<'a> {
    pub fn new<P: Into<String>>(program: P, args: Arguments<'a>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl<'a> fmt::Display for ToolCommand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args)
        }
    }
}

/// The streams and the exit status captured from a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub success: bool,
    /// [`None`] when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CapturedOutput {
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim_end().to_string()
    }
}

impl From<Output> for CapturedOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}
