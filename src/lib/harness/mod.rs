//! The command timing harness: runs an external tool against a target, measures
//! how long the tool took, validates its output and keeps the tally of the run

pub mod runner;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::cli::output::reporter::Reporter;
use crate::domain::invocation::{InvocationResult, Measurement, Outcome};
use crate::domain::summary::RunSummary;
use crate::tools::Tool;

use self::runner::CommandRunner;

pub struct Harness<'t, R: CommandRunner, W: Write> {
    tool: &'t dyn Tool,
    runner: R,
    reporter: Reporter<W>,
}

impl<'t, R: CommandRunner, W: Write> Harness<'t, R, W> {
    pub fn new(tool: &'t dyn Tool, runner: R, reporter: Reporter<W>) -> Self {
        Self {
            tool,
            runner,
            reporter,
        }
    }

    /// Measures a single invocation of the tool against `target`.
    ///
    /// A target that doesn't exist is reported and returned as
    /// [`Measurement::NotFound`] without launching anything. Otherwise, the tool
    /// is invoked exactly once and its outcome reported straight away. Only the
    /// child process execution is timed: the preparation of the target and the
    /// inspection of the output are left out
    pub fn measure(&mut self, target: &Path) -> Measurement {
        if !target.exists() {
            self.reporter.not_found(target);
            return Measurement::NotFound(target.to_path_buf());
        }

        self.reporter.details(&self.tool.describe(target));

        if let Err(e) = self.tool.prepare(target) {
            log::error!("Could not prepare the {} run for {target:?}: {e:?}", self.tool.name());
            let outcome = Outcome::ToolError {
                status: None,
                stderr: format!("{e:#}"),
            };
            return self.conclude(target, Duration::ZERO, outcome);
        }

        let command = self.tool.command_line(target);
        log::debug!("Measuring command => {command}");
        self.reporter.starting(self.tool.name());

        let start = Instant::now();
        let output = self.runner.run(&command);
        let elapsed = start.elapsed();

        let outcome = match output {
            Err(e) => Outcome::ToolError {
                status: None,
                stderr: format!("Could not launch {}: {e}", command.program),
            },
            Ok(output) if !output.success => Outcome::ToolError {
                status: output.code,
                stderr: output.stderr_lossy(),
            },
            Ok(output) => match self.tool.inspect(target, &output) {
                Ok(metrics) => Outcome::Success(metrics),
                Err(message) => Outcome::ParseError { message },
            },
        };

        self.conclude(target, elapsed, outcome)
    }

    /// Measures every target in order, one at a time, and reports the aggregated
    /// figures once all of them are done. A failure in any target never stops
    /// the remaining ones from being measured
    pub fn measure_batch(&mut self, targets: &[PathBuf]) -> RunSummary {
        let total = targets.len();
        self.reporter.batch_header(total);

        let mut summary = RunSummary::default();
        for (i, target) in targets.iter().enumerate() {
            self.reporter.progress(i + 1, total);
            summary.record(self.measure(target));
        }

        self.reporter.summary(&summary);
        summary
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_parts(self) -> (R, Reporter<W>) {
        (self.runner, self.reporter)
    }

    fn conclude(&mut self, target: &Path, elapsed: Duration, outcome: Outcome) -> Measurement {
        let result = InvocationResult::new(target.to_path_buf(), elapsed, outcome);
        self.reporter.outcome(&result);
        Measurement::Attempted(result)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use color_eyre::{eyre::eyre, Result};
    use tempfile::{tempdir, TempDir};

    use super::*;
    use crate::domain::commands::command_line::{CapturedOutput, ToolCommand};
    use crate::domain::invocation::OutputMetrics;
    use crate::tools::{Detail, SyntaxTreeTool};

    /// Replays canned process outputs, recording every command it's asked to run
    #[derive(Default)]
    struct ScriptedRunner {
        responses: VecDeque<io::Result<CapturedOutput>>,
        calls: Vec<String>,
    }

    impl ScriptedRunner {
        fn with(responses: impl IntoIterator<Item = io::Result<CapturedOutput>>) -> Self {
            Self {
                responses: responses.into_iter().collect(),
                calls: Vec::new(),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, command: &ToolCommand<'_>) -> io::Result<CapturedOutput> {
            self.calls.push(command.to_string());
            self.responses
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::Other, "no response left")))
        }
    }

    fn exits_with(code: i32, stdout: &str, stderr: &str) -> io::Result<CapturedOutput> {
        Ok(CapturedOutput {
            success: code == 0,
            code: Some(code),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        })
    }

    const MODULE_TREE: &str = r#"{"type":"module","children":[]}"#;

    fn source_files(names: &[&str]) -> Result<(TempDir, Vec<PathBuf>)> {
        let temp = tempdir()?;
        let mut paths = Vec::with_capacity(names.len());
        for name in names {
            let path = temp.path().join(name);
            std::fs::write(&path, "def main():\n    pass\n")?;
            paths.push(path);
        }
        Ok((temp, paths))
    }

    fn harness<'t>(
        tool: &'t dyn Tool,
        runner: ScriptedRunner,
    ) -> Harness<'t, ScriptedRunner, Vec<u8>> {
        Harness::new(tool, runner, Reporter::new(Vec::new()))
    }

    fn printed(harness: Harness<'_, ScriptedRunner, Vec<u8>>) -> String {
        let (_, reporter) = harness.into_parts();
        String::from_utf8_lossy(&reporter.into_inner()).to_string()
    }

    #[test]
    fn test_single_existing_file_succeeds() -> Result<()> {
        let (_temp, files) = source_files(&["main.py"])?;
        let tool = SyntaxTreeTool::new("tree-sitter");
        let mut harness = harness(&tool, ScriptedRunner::with([exits_with(0, MODULE_TREE, "")]));

        let measurement = harness.measure(&files[0]);

        let result = measurement.result().ok_or_else(|| eyre!("expected an attempt"))?;
        assert!(result.is_success());
        assert!(matches!(
            result.outcome(),
            Outcome::Success(OutputMetrics::Ast { .. })
        ));
        assert!(result.elapsed() >= Duration::ZERO);
        assert_eq!(harness.runner().calls.len(), 1);
        assert_eq!(
            harness.runner().calls[0],
            format!("tree-sitter parse {} --output-format json", files[0].display())
        );

        let output = printed(harness);
        assert!(output.contains("File size: 21 bytes"));
        assert!(output.contains("AST JSON size:"));
        Ok(())
    }

    #[test]
    fn test_missing_file_never_invokes_the_tool() {
        let tool = SyntaxTreeTool::new("tree-sitter");
        let mut harness = harness(&tool, ScriptedRunner::default());

        let measurement = harness.measure(Path::new("/no/such/file.py"));

        assert_eq!(
            measurement,
            Measurement::NotFound(PathBuf::from("/no/such/file.py"))
        );
        assert!(harness.runner().calls.is_empty());
        assert!(printed(harness).contains("Target not found: /no/such/file.py"));
    }

    #[test]
    fn test_non_zero_exit_is_a_tool_error() -> Result<()> {
        let (_temp, files) = source_files(&["main.py"])?;
        let tool = SyntaxTreeTool::new("tree-sitter");
        // Even a perfectly valid tree can't turn a failed run into a success
        let runner = ScriptedRunner::with([exits_with(1, MODULE_TREE, "No language found\n")]);
        let mut harness = harness(&tool, runner);

        let measurement = harness.measure(&files[0]);

        let result = measurement.result().ok_or_else(|| eyre!("expected an attempt"))?;
        assert_eq!(
            result.outcome(),
            &Outcome::ToolError {
                status: Some(1),
                stderr: String::from("No language found")
            }
        );
        assert!(printed(harness).contains("Error: No language found"));
        Ok(())
    }

    #[test]
    fn test_malformed_output_is_a_parse_error() -> Result<()> {
        let (_temp, files) = source_files(&["main.py"])?;
        let tool = SyntaxTreeTool::new("tree-sitter");
        let runner = ScriptedRunner::with([exits_with(0, "(module)", "")]);
        let mut harness = harness(&tool, runner);

        let measurement = harness.measure(&files[0]);

        let result = measurement.result().ok_or_else(|| eyre!("expected an attempt"))?;
        assert!(matches!(result.outcome(), Outcome::ParseError { .. }));
        assert!(printed(harness).contains("Invalid output after"));
        Ok(())
    }

    #[test]
    fn test_unlaunchable_tool_is_a_tool_error() -> Result<()> {
        let (_temp, files) = source_files(&["main.py"])?;
        let tool = SyntaxTreeTool::new("tree-sitter");
        let runner = ScriptedRunner::with([Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        ))]);
        let mut harness = harness(&tool, runner);

        let measurement = harness.measure(&files[0]);

        let result = measurement.result().ok_or_else(|| eyre!("expected an attempt"))?;
        match result.outcome() {
            Outcome::ToolError { status, stderr } => {
                assert_eq!(*status, None);
                assert!(stderr.contains("Could not launch tree-sitter"));
            }
            other => return Err(eyre!("unexpected outcome: {other:?}")),
        }
        Ok(())
    }

    /// A tool whose preparation always fails
    struct Unpreparable;

    impl Tool for Unpreparable {
        fn name(&self) -> &str {
            "unpreparable"
        }

        fn describe(&self, _target: &Path) -> Vec<Detail> {
            Vec::new()
        }

        fn prepare(&self, _target: &Path) -> Result<()> {
            Err(eyre!("read-only output directory"))
        }

        fn command_line<'a>(&'a self, _target: &'a Path) -> ToolCommand<'a> {
            ToolCommand::new("true", Default::default())
        }

        fn inspect(
            &self,
            _target: &Path,
            _output: &CapturedOutput,
        ) -> std::result::Result<OutputMetrics, String> {
            Ok(OutputMetrics::Ast { json_bytes: 0 })
        }
    }

    #[test]
    fn test_failed_preparation_skips_the_invocation() -> Result<()> {
        let (_temp, files) = source_files(&["main.py"])?;
        let mut harness = harness(&Unpreparable, ScriptedRunner::default());

        let measurement = harness.measure(&files[0]);

        let result = measurement.result().ok_or_else(|| eyre!("expected an attempt"))?;
        assert_eq!(result.elapsed(), Duration::ZERO);
        assert!(matches!(result.outcome(), Outcome::ToolError { status: None, .. }));
        assert!(harness.runner().calls.is_empty());
        Ok(())
    }

    #[test]
    fn test_batch_with_a_failing_target() -> Result<()> {
        let (_temp, files) = source_files(&["a.py", "b.py", "c.py"])?;
        let tool = SyntaxTreeTool::new("tree-sitter");
        let runner = ScriptedRunner::with([
            exits_with(0, MODULE_TREE, ""),
            exits_with(1, "", "parse failure"),
            exits_with(0, MODULE_TREE, ""),
        ]);
        let mut harness = harness(&tool, runner);

        let summary = harness.measure_batch(&files);

        assert_eq!(summary.attempted(), 3);
        assert_eq!(summary.successful(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(
            summary.total_elapsed(),
            summary.results().iter().map(|r| r.elapsed()).sum::<Duration>()
        );
        assert!(!summary.results()[1].is_success());
        assert_eq!(harness.runner().calls.len(), 3);

        let output = printed(harness);
        assert!(output.contains("[1/3]"));
        assert!(output.contains("[2/3]"));
        assert!(output.contains("[3/3]"));
        assert!(output.contains("Successful: 2"));
        assert!(output.contains("Failed: 1"));
        Ok(())
    }

    #[test]
    fn test_batch_skips_missing_targets() -> Result<()> {
        let (_temp, mut files) = source_files(&["a.py", "c.py"])?;
        files.insert(1, PathBuf::from("/no/such/file.py"));
        let tool = SyntaxTreeTool::new("tree-sitter");
        let runner = ScriptedRunner::with([
            exits_with(0, MODULE_TREE, ""),
            exits_with(0, "not json", ""),
        ]);
        let mut harness = harness(&tool, runner);

        let summary = harness.measure_batch(&files);

        assert_eq!(summary.requested(), 3);
        assert_eq!(summary.attempted(), 2);
        assert_eq!(summary.results().len(), 2);
        assert_eq!(summary.successful(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.skipped().collect::<Vec<_>>(), [Path::new("/no/such/file.py")]);
        assert_eq!(harness.runner().calls.len(), 2);
        assert!(printed(harness).contains("Skipped (not found): 1"));
        Ok(())
    }

    #[test]
    fn test_empty_batch_yields_an_empty_summary() {
        let tool = SyntaxTreeTool::new("tree-sitter");
        let mut harness = harness(&tool, ScriptedRunner::default());

        let summary = harness.measure_batch(&[]);

        assert_eq!(summary, RunSummary::default());
        assert_eq!(summary.average_secs(), 0.0);
        assert!(printed(harness).contains("Average time: 0.000 seconds per target"));
    }
}
