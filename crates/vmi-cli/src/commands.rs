//! Subcommand implementations.

use anyhow::Result;

use vmi_cli::runner::{RunOptions, RunResult, run};
use vmi_model::ProcessorOptions;

use crate::cli::{CheckArgs, ProcessArgs};

pub fn run_process(args: &ProcessArgs) -> Result<RunResult> {
    let options = RunOptions {
        passes: args.passes.clone(),
        output_dir: Some(args.out.clone()),
        report_path: args.report.clone(),
        processor_options: ProcessorOptions {
            state_handle_on_classpath: !args.no_state_handle,
            emit_generated_annotation: !args.no_generated_annotation,
        },
    };
    run(&options)
}

pub fn run_check(args: &CheckArgs) -> Result<RunResult> {
    let options = RunOptions {
        passes: args.passes.clone(),
        output_dir: None,
        report_path: None,
        processor_options: ProcessorOptions {
            state_handle_on_classpath: !args.no_state_handle,
            ..ProcessorOptions::default()
        },
    };
    run(&options)
}
