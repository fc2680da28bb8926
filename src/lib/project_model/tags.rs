use std::path::PathBuf;

use crate::tools::TagsTool;

#[derive(Debug, PartialEq, Eq)]
pub struct TagsModel {
    pub program: String,
    /// Always absolute, already anchored to the root directory
    pub output: PathBuf,
    pub excludes: Vec<String>,
    pub fields: String,
    pub extras: String,
}

impl From<&TagsModel> for TagsTool {
    fn from(model: &TagsModel) -> Self {
        Self {
            program: model.program.clone(),
            output: model.output.clone(),
            excludes: model.excludes.clone(),
            fields: model.fields.clone(),
            extras: model.extras.clone(),
        }
    }
}
