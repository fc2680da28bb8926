pub mod cli;
pub mod config_file;
pub mod domain;
pub mod harness;
pub mod project_model;
pub mod tools;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use color_eyre::{eyre::Context, Result};

    use crate::{
        cli::{
            input::{CliArgs, Command},
            output::{json_report, reporter::Reporter},
        },
        config_file::{self, ToolclockConfigFile},
        domain::{summary::RunSummary, target::expand_targets},
        harness::{
            runner::{CommandRunner, SystemRunner},
            Harness,
        },
        project_model::ToolclockModel,
        tools::{SyntaxTreeTool, TagsTool, Tool},
        utils::{self, constants::error_messages, reader},
    };

    /// The main work of the project. Measures the tool chosen in the CLI against
    /// every given target, reporting to stdout
    pub fn run_toolclock(cli_args: &CliArgs) -> Result<RunSummary> {
        run_toolclock_with(cli_args, SystemRunner, std::io::stdout())
    }

    /// Same as [`run_toolclock`], but with the process runner and the report sink
    /// chosen by the caller
    pub fn run_toolclock_with<R, W>(cli_args: &CliArgs, runner: R, out: W) -> Result<RunSummary>
    where
        R: CommandRunner,
        W: Write,
    {
        let abs_root = determine_absolute_path_of_the_root(cli_args)?;

        let raw_config = match reader::find_config_file(cli_args, &abs_root)? {
            Some(cfg_path) => fs::read_to_string(&cfg_path)
                .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))?,
            None => String::new(),
        };
        let config: ToolclockConfigFile<'_> = config_file::toolclock_cfg_from_file(&raw_config)
            .with_context(|| error_messages::PARSE_CFG_FILE)?;

        let model: ToolclockModel = reader::build_model(config, cli_args, &abs_root);
        log::debug!("Loaded the toolclock model: {model:?}");

        let targets = expand_targets(&model.root, cli_args.command.targets());

        let tool: Box<dyn Tool> = match cli_args.command {
            Command::Parse { .. } => Box::new(SyntaxTreeTool::from(&model.parser)),
            Command::Tags { .. } => Box::new(TagsTool::from(&model.tags)),
        };
        log::info!("Measuring the {} tool over {} targets", tool.name(), targets.len());

        let summary = measure_targets(tool.as_ref(), runner, out, &targets);

        if let Some(json_path) = model.report.json.as_ref() {
            json_report::write(json_path, tool.name(), &summary)?;
        }

        Ok(summary)
    }

    /// A single target is just measured, while two or more are handled as a
    /// batch, with its progress and aggregated report
    fn measure_targets<R, W>(tool: &dyn Tool, runner: R, out: W, targets: &[PathBuf]) -> RunSummary
    where
        R: CommandRunner,
        W: Write,
    {
        let mut harness = Harness::new(tool, runner, Reporter::new(out));

        match targets {
            [single] => std::iter::once(harness.measure(single)).collect(),
            _ => harness.measure_batch(targets),
        }
    }

    /// Resolves the full path of the root directory on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the root path, otherwise, we will
    /// assume that the root is exactly in the same directory from where the *toolclock*
    /// binary was invoked by the user
    fn determine_absolute_path_of_the_root(cli_args: &CliArgs) -> Result<PathBuf> {
        let root = cli_args.root.as_deref().unwrap_or(Path::new("."));

        utils::fs::get_root_absolute_path(root)
            .with_context(|| error_messages::FAILURE_GATHERING_ROOT_ABS_PATH)
    }

}
