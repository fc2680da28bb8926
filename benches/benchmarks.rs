//! Benchmarks tests for measuring the overhead that the harness adds on top of
//! the external tools

use std::io;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use toolclock::{
    cli::output::reporter::Reporter,
    domain::commands::command_line::{CapturedOutput, ToolCommand},
    harness::{runner::CommandRunner, Harness},
    tools::SyntaxTreeTool,
};

/// Answers instantly with a fixed syntax tree, so only the harness is measured
struct InstantRunner;

impl CommandRunner for InstantRunner {
    fn run(&mut self, _command: &ToolCommand<'_>) -> io::Result<CapturedOutput> {
        Ok(CapturedOutput {
            success: true,
            code: Some(0),
            stdout: br#"{"type":"module","children":[{"type":"expression_statement","children":[]}]}"#
                .to_vec(),
            stderr: Vec::new(),
        })
    }
}

pub fn harness_overhead_benchmark(c: &mut Criterion) {
    let tool = SyntaxTreeTool::new("tree-sitter");
    let targets: Vec<PathBuf> = std::iter::repeat(PathBuf::from(file!()))
        .take(16)
        .collect();

    c.bench_function("Measure a single target", |b| {
        b.iter(|| {
            let mut harness = Harness::new(&tool, InstantRunner, Reporter::new(io::sink()));
            harness.measure(black_box(&targets[0]))
        })
    });

    c.bench_function("Measure a batch of 16 targets", |b| {
        b.iter(|| {
            let mut harness = Harness::new(&tool, InstantRunner, Reporter::new(io::sink()));
            harness.measure_batch(black_box(&targets))
        })
    });
}

criterion_group!(benches, harness_overhead_benchmark);
criterion_main!(benches);
