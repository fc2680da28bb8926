use serde::*;

/// [`ReportAttribute`] - Extra reports of a run
/// * `json` - File where the JSON report is written, relative to the root directory
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ReportAttribute<'a> {
    #[serde(borrow)]
    pub json: Option<&'a str>,
}
