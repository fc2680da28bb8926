//! Launches the external commands and collects what they leave behind

use std::io;
use std::process::{Command, Stdio};

use crate::domain::commands::command_line::{CapturedOutput, ToolCommand};

/// Runs a [`ToolCommand`] to completion, capturing its output streams.
///
/// The call blocks until the child process exits. An [`Err`] means that the
/// process couldn't be launched at all
pub trait CommandRunner {
    fn run(&mut self, command: &ToolCommand<'_>) -> io::Result<CapturedOutput>;
}

/// Executes the commands as real child processes of the current one
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ToolCommand<'_>) -> io::Result<CapturedOutput> {
        log::trace!("Executing command => {command}");

        let output = Command::new(&command.program)
            .args(command.args.iter())
            .stdin(Stdio::null())
            .output()?;

        log::trace!("Result: {:?}", output.status);
        Ok(CapturedOutput::from(output))
    }
}
