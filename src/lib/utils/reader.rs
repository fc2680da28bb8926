use crate::{
    cli::input::{CliArgs, Command},
    config_file::{
        parser::ParserAttribute, report::ReportAttribute, tags::TagsAttribute,
        ToolclockConfigFile,
    },
    project_model::{
        parser::ParserModel, report::ReportModel, tags::TagsModel, ToolclockModel,
    },
    utils::{
        constants::{defaults, CONFIG_FILE_NAME},
        fs::anchor_to,
    },
};
use color_eyre::{eyre::eyre, Result};
use std::path::{Path, PathBuf};

/// Looks for the configuration file of the run.
///
/// An explicit `--config` path must exist, otherwise it's an error. Without it,
/// the `toolclock.toml` at the root directory is used when present, and the
/// run goes on with the built-in defaults when it isn't
pub fn find_config_file(cli_args: &CliArgs, absolute_root: &Path) -> Result<Option<PathBuf>> {
    if let Some(explicit) = cli_args.config.as_deref() {
        let path = anchor_to(absolute_root, explicit);
        return if path.is_file() {
            Ok(Some(path))
        } else {
            Err(eyre!("The configuration file {path:?} doesn't exist"))
        };
    }

    let implicit = absolute_root.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        log::debug!("Found a configuration file at: {implicit:?}");
        Ok(Some(implicit))
    } else {
        log::debug!("No configuration file found. Using the defaults");
        Ok(None)
    }
}

/// Merges the CLI arguments, the configuration file and the defaults, in that
/// order of precedence, into the [`ToolclockModel`] of the run
pub fn build_model(
    config: ToolclockConfigFile<'_>,
    cli_args: &CliArgs,
    absolute_root: &Path,
) -> ToolclockModel {
    let parser = assemble_parser_model(config.parser, &cli_args.command);
    let tags = assemble_tags_model(config.tags, &cli_args.command, absolute_root);
    let report = assemble_report_model(config.report, cli_args, absolute_root);

    ToolclockModel {
        root: absolute_root.to_path_buf(),
        parser,
        tags,
        report,
    }
}

fn assemble_parser_model(config: Option<ParserAttribute>, command: &Command) -> ParserModel {
    let cli_tool = match command {
        Command::Parse { tool, .. } => tool.as_deref(),
        _ => None,
    };

    let program = cli_tool
        .or_else(|| config.as_ref().and_then(|parser| parser.program))
        .unwrap_or(defaults::SYNTAX_TREE_PROGRAM)
        .to_string();

    let extra_args = config
        .and_then(|parser| parser.extra_args)
        .map(|args| args.into_iter().map(String::from).collect())
        .unwrap_or_default();

    ParserModel {
        program,
        extra_args,
    }
}

fn assemble_tags_model(
    config: Option<TagsAttribute>,
    command: &Command,
    absolute_root: &Path,
) -> TagsModel {
    let config = config.unwrap_or_default();

    let (cli_tool, cli_output, cli_excludes, cli_fields, cli_extras) = match command {
        Command::Tags {
            tool,
            output,
            excludes,
            fields,
            extras,
            ..
        } => (
            tool.as_deref(),
            output.as_deref(),
            excludes.as_slice(),
            fields.as_deref(),
            extras.as_deref(),
        ),
        _ => (None, None, &[] as &[String], None, None),
    };

    let program = cli_tool
        .or(config.program)
        .unwrap_or(defaults::TAGS_PROGRAM)
        .to_string();

    let output = cli_output
        .or_else(|| config.output.map(Path::new))
        .unwrap_or(Path::new(defaults::TAGS_OUTPUT_FILE));

    let excludes = if !cli_excludes.is_empty() {
        cli_excludes.to_vec()
    } else if let Some(excludes) = config.exclude {
        excludes.into_iter().map(String::from).collect()
    } else {
        defaults::TAGS_EXCLUDES.iter().map(|e| e.to_string()).collect()
    };

    TagsModel {
        program,
        output: anchor_to(absolute_root, output),
        excludes,
        fields: cli_fields
            .or(config.fields)
            .unwrap_or(defaults::TAGS_FIELDS)
            .to_string(),
        extras: cli_extras
            .or(config.extras)
            .unwrap_or(defaults::TAGS_EXTRAS)
            .to_string(),
    }
}

fn assemble_report_model(
    config: Option<ReportAttribute>,
    cli_args: &CliArgs,
    absolute_root: &Path,
) -> ReportModel {
    let json = cli_args
        .json
        .as_deref()
        .or_else(|| config.and_then(|report| report.json).map(Path::new))
        .map(|path| anchor_to(absolute_root, path));

    ReportModel { json }
}
