//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod parser;
pub mod report;
pub mod tags;

use serde::Deserialize;

use self::{parser::ParserAttribute, report::ReportAttribute, tags::TagsAttribute};

/// ```rust
/// use toolclock::config_file::{self, ToolclockConfigFile};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [parser]
///     program = '/usr/local/bin/tree-sitter'
///
///     [tags]
///     output = 'build/tags'
///     exclude = [ 'target', 'node_modules' ]
///
///     [report]
///     json = 'build/toolclock.json'
/// "#;
///
/// let config: ToolclockConfigFile = config_file::toolclock_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the toolclock toml file");
///
/// let parser = config.parser.expect("Missing [parser] table");
/// assert_eq!(parser.program, Some("/usr/local/bin/tree-sitter"));
/// assert!(parser.extra_args.is_none());
///
/// let tags = config.tags.expect("Missing [tags] table");
/// assert_eq!(tags.program, None);
/// assert_eq!(tags.output, Some("build/tags"));
/// assert_eq!(tags.exclude, Some(vec!["target", "node_modules"]));
///
/// assert_eq!(config.report.and_then(|r| r.json), Some("build/toolclock.json"));
/// ```
/// The [`ToolclockConfigFile`] is the type that holds
/// the whole hierarchy of toolclock config file attributes.
/// Every table is optional, as every value has a built-in default
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolclockConfigFile<'a> {
    #[serde(borrow)]
    pub parser: Option<ParserAttribute<'a>>,
    #[serde(borrow)]
    pub tags: Option<TagsAttribute<'a>>,
    #[serde(borrow)]
    pub report: Option<ReportAttribute<'a>>,
}

pub fn toolclock_cfg_from_file(cfg: &'_ str) -> Result<ToolclockConfigFile<'_>, toml::de::Error> {
    <ToolclockConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::CONFIG_FILE_MOCK;

    #[test]
    fn test_full_config_file() -> Result<(), toml::de::Error> {
        let config = toolclock_cfg_from_file(CONFIG_FILE_MOCK)?;

        let parser = config.parser.unwrap_or_default();
        assert_eq!(parser.program, Some("/opt/tree-sitter/bin/tree-sitter"));
        assert_eq!(parser.extra_args, Some(vec!["--quiet"]));

        let tags = config.tags.unwrap_or_default();
        assert_eq!(tags.program, Some("universal-ctags"));
        assert_eq!(tags.fields, Some("+n"));
        assert_eq!(tags.extras, None);

        Ok(())
    }

    #[test]
    fn test_empty_config_file() -> Result<(), toml::de::Error> {
        assert_eq!(toolclock_cfg_from_file("")?, ToolclockConfigFile::default());
        Ok(())
    }

    #[test]
    fn test_unknown_tables_are_rejected() {
        assert!(toolclock_cfg_from_file("[compiler]\ncpp_compiler = 'clang'").is_err());
        assert!(toolclock_cfg_from_file("[tags]\nrecursive = false").is_err());
    }
}
