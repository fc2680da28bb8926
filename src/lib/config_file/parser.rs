///! The options for the syntax tree tool
use serde::*;

/// [`ParserAttribute`] - How to launch the syntax tree tool
/// * `program` - The executable to launch. Defaults to `tree-sitter` on the `PATH`
/// * `extra_args` - Extra arguments appended to the `parse` command line
///
/// ```rust
/// use toolclock::config_file::parser::ParserAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[parser]
///     program = 'tree-sitter'
///     extra_args = [ '--quiet' ]
///"#;
///
/// let config: ParserAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the toolclock toml file");
///
/// assert_eq!(config.program, Some("tree-sitter"));
/// assert_eq!(config.extra_args, Some(vec!["--quiet"]));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ParserAttribute<'a> {
    #[serde(borrow)]
    pub program: Option<&'a str>,
    #[serde(borrow)]
    pub extra_args: Option<Vec<&'a str>>,
}
