use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use std::path::PathBuf;
/// use toolclock::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "parse", "main.py", "lib.py"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(
///     parser.command,
///     Command::Parse {
///         targets: vec![PathBuf::from("main.py"), PathBuf::from("lib.py")],
///         tool: None,
///     }
/// );
///
/// let parser = CliArgs::parse_from(["", "--json", "out.json", "tags", "-f", "my_tags", "."]);
/// assert_eq!(parser.json, Some(PathBuf::from("out.json")));
/// assert!(matches!(
///     parser.command,
///     Command::Tags { ref output, .. } if *output == Some(PathBuf::from("my_tags"))
/// ));
///
/// // Zero targets is a usage error
/// assert!(CliArgs::try_parse_from(["", "parse"]).is_err());
/// ```
#[derive(Parser, Debug)]
#[command(name = "toolclock")]
#[command(author = "Zero Day Code")]
#[command(version)]
#[command(
    about = "toolclock measures how long external tools take to process your sources",
    long_about = "toolclock times the generation of syntax trees (tree-sitter) and tag files (ctags), \
    and reports the elapsed time and the size of what they produced"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "toolclock maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file. Defaults to <root>/toolclock.toml, if present"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Directory where the relative paths are resolved from. Defaults to the current one"
    )]
    pub root: Option<PathBuf>,

    #[arg(long, global = true, help = "Also write the report of the run as JSON to this file")]
    pub json: Option<PathBuf>,
}

/// [`Command`] - The tools that can be measured
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Measures the syntax tree generation of one or more source files
    #[command(visible_alias = "ast")]
    Parse {
        #[arg(required = true, num_args = 1.., help = "Source files (or glob patterns) to parse")]
        targets: Vec<PathBuf>,
        #[arg(long, help = "The syntax tree tool to launch. Defaults to `tree-sitter`")]
        tool: Option<String>,
    },
    /// Measures the tag file generation of one or more project directories
    #[command(visible_alias = "ctags")]
    Tags {
        #[arg(required = true, num_args = 1.., help = "Project directories to scan")]
        targets: Vec<PathBuf>,
        #[arg(long, help = "The tag generator to launch. Defaults to `ctags`")]
        tool: Option<String>,
        #[arg(short = 'f', long, help = "Where the tags file is written. Defaults to <root>/tags")]
        output: Option<PathBuf>,
        #[arg(long = "exclude", help = "Directory names excluded from the scan. Replaces the defaults")]
        excludes: Vec<String>,
        #[arg(long, help = "Value for the `--fields` option of the tag generator")]
        fields: Option<String>,
        #[arg(long, help = "Value for the `--extras` option of the tag generator")]
        extras: Option<String>,
    },
}

impl Command {
    pub fn targets(&self) -> &[PathBuf] {
        match self {
            Command::Parse { targets, .. } | Command::Tags { targets, .. } => targets,
        }
    }
}
