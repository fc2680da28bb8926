pub mod json_report;
pub mod reporter;
