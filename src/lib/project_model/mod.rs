//! The resolved, read only settings of a toolclock run, built from the CLI
//! arguments, the configuration file and the built-in defaults
pub mod parser;
pub mod report;
pub mod tags;

use std::path::PathBuf;

use self::{parser::ParserModel, report::ReportModel, tags::TagsModel};

#[derive(Debug, PartialEq, Eq)]
pub struct ToolclockModel {
    /// Absolute path where the relative paths given by the user are anchored
    pub root: PathBuf,
    pub parser: ParserModel,
    pub tags: TagsModel,
    pub report: ReportModel,
}
