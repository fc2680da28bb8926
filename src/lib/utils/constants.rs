//! Constant value definitions to use across the whole program

pub const CONFIG_FILE_NAME: &str = "toolclock.toml";

/// Default values for the measured tools when neither the CLI nor the
/// configuration file says otherwise
pub mod defaults {
    pub const SYNTAX_TREE_PROGRAM: &str = "tree-sitter";
    pub const TAGS_PROGRAM: &str = "ctags";
    pub const TAGS_OUTPUT_FILE: &str = "tags";
    pub const TAGS_FIELDS: &str = "+iaS";
    pub const TAGS_EXTRAS: &str = "+q";
    pub const TAGS_EXCLUDES: [&str; 3] = ["node_modules", ".git", "__pycache__"];
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const FAILURE_GATHERING_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path of the root directory";
    pub const FAILURE_WRITING_JSON_REPORT: &str = "Could not write the JSON report";
    pub const FAILURE_SERIALIZING_JSON_REPORT: &str = "Could not serialize the JSON report";
    pub const FAILURE_REMOVING_STALE_OUTPUT: &str = "Could not remove the stale output file";
}

/// The glob metacharacters that turn a CLI target into a pattern
pub const GLOB_METACHARS: [char; 3] = ['*', '?', '['];

pub const CONFIG_FILE_MOCK: &str = r#"
[parser]
program = "/opt/tree-sitter/bin/tree-sitter"
extra_args = [ "--quiet" ]

[tags]
program = "universal-ctags"
output = "out/tags"
exclude = [ "target", ".git" ]
fields = "+n"

[report]
json = "out/report.json"
"#;
