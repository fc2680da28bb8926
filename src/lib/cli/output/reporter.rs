//! Human readable reports of the measurements, printed as soon as every
//! event happens

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::domain::invocation::{InvocationResult, Outcome, OutputMetrics};
use crate::domain::summary::RunSummary;
use crate::tools::{thousands, Detail};

const RULE_WIDTH: usize = 50;

/// Writes the report lines to any [`Write`] sink. A failure writing the report
/// never interrupts the measurements, it's just logged
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn batch_header(&mut self, targets: usize) {
        self.emit(format_args!("Measuring {targets} targets..."));
        self.rule();
    }

    pub fn progress(&mut self, index: usize, total: usize) {
        self.emit(format_args!("\n[{index}/{total}]"));
    }

    pub fn not_found(&mut self, target: &Path) {
        self.emit(format_args!("Target not found: {}", target.display()));
    }

    pub fn details(&mut self, details: &[Detail]) {
        for detail in details {
            self.emit(format_args!("{detail}"));
        }
    }

    pub fn starting(&mut self, tool_name: &str) {
        self.emit(format_args!("Starting {tool_name} generation..."));
    }

    pub fn outcome(&mut self, result: &InvocationResult) {
        let secs = result.elapsed().as_secs_f64();
        match result.outcome() {
            Outcome::Success(metrics) => {
                self.emit(format_args!("Success!"));
                self.emit(format_args!("Time: {secs:.3} seconds"));
                self.metrics(metrics);
            }
            Outcome::ToolError { status, stderr } => {
                match status {
                    Some(code) => self.emit(format_args!(
                        "Failed after {secs:.3} seconds (exit status: {code})"
                    )),
                    None => self.emit(format_args!("Failed after {secs:.3} seconds")),
                }
                self.emit(format_args!("Error: {stderr}"));
            }
            Outcome::ParseError { message } => {
                self.emit(format_args!("Invalid output after {secs:.3} seconds"));
                self.emit(format_args!("Error: {message}"));
            }
        }
    }

    pub fn summary(&mut self, summary: &RunSummary) {
        self.emit(format_args!(""));
        self.rule();
        self.emit(format_args!("Summary:"));
        self.emit(format_args!("   Attempted: {}", summary.attempted()));
        self.emit(format_args!("   Successful: {}", summary.successful()));
        self.emit(format_args!("   Failed: {}", summary.failed()));
        let skipped = summary.requested() - summary.attempted();
        if skipped > 0 {
            self.emit(format_args!("   Skipped (not found): {skipped}"));
        }
        self.emit(format_args!(
            "   Total time: {:.3} seconds",
            summary.total_elapsed().as_secs_f64()
        ));
        self.emit(format_args!(
            "   Average time: {:.3} seconds per target",
            summary.average_secs()
        ));
    }

    fn metrics(&mut self, metrics: &OutputMetrics) {
        match *metrics {
            OutputMetrics::Ast { json_bytes } => {
                self.emit(format_args!("AST JSON size: {} bytes", thousands(json_bytes)));
            }
            OutputMetrics::Tags {
                file_bytes,
                tag_count,
            } => {
                self.emit(format_args!("Tags file size: {} bytes", thousands(file_bytes)));
                self.emit(format_args!("Number of tags: {}", thousands(tag_count)));
            }
        }
    }

    fn rule(&mut self) {
        self.emit(format_args!("{}", "=".repeat(RULE_WIDTH)));
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("Could not write the report: {e}");
        }
    }
}
