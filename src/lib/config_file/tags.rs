///! The options for the tag generator tool
use serde::*;

/// [`TagsAttribute`] - How to launch the tag generator
/// * `program` - The executable to launch. Defaults to `ctags` on the `PATH`
/// * `output` - Where the tags file is written, relative to the root directory
/// * `exclude` - Directory names left out of the scan
/// * `fields` - Value for the `--fields` option
/// * `extras` - Value for the `--extras` option
///
/// ```rust
/// use toolclock::config_file::tags::TagsAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[tags]
///     output = 'out/tags'
///     exclude = [ 'target' ]
///     extras = '+qf'
///"#;
///
/// let config: TagsAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the toolclock toml file");
///
/// assert_eq!(config.output, Some("out/tags"));
/// assert_eq!(config.exclude, Some(vec!["target"]));
/// assert_eq!(config.extras, Some("+qf"));
/// assert_eq!(config.fields, None);
/// ```
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct TagsAttribute<'a> {
    #[serde(borrow)]
    pub program: Option<&'a str>,
    #[serde(borrow)]
    pub output: Option<&'a str>,
    #[serde(borrow)]
    pub exclude: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub fields: Option<&'a str>,
    #[serde(borrow)]
    pub extras: Option<&'a str>,
}
