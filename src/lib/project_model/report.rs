use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Default)]
pub struct ReportModel {
    pub json: Option<PathBuf>,
}
