//! Drives the processor over a sequence of pass files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use vmi_model::{DiagnosticReport, PassInput, ProcessorOptions};
use vmi_processor::{FsFiler, ViewModelInjectProcessor};

use crate::report::write_diagnostics_report;

/// What to run and where the outputs go.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Pass files, processed in order; each file is one compilation pass.
    pub passes: Vec<PathBuf>,
    /// Output root for generated sources. When absent nothing is written
    /// (check mode).
    pub output_dir: Option<PathBuf>,
    /// Where the JSON diagnostics report goes. Defaults to
    /// `<output_dir>/diagnostics_report.json` when output is enabled.
    pub report_path: Option<PathBuf>,
    pub processor_options: ProcessorOptions,
}

/// Per-pass accounting for the summary table.
#[derive(Debug, Clone)]
pub struct PassSummary {
    /// 1-based pass number.
    pub index: usize,
    /// Declarations presented in the pass.
    pub types: usize,
    /// Relative paths of sources generated by the pass.
    pub generated: Vec<PathBuf>,
    pub error_count: usize,
    pub warning_count: usize,
}

#[derive(Debug)]
pub struct RunResult {
    pub passes: Vec<PassSummary>,
    pub report: DiagnosticReport,
    pub output_dir: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub has_errors: bool,
}

/// Load one pass file.
pub fn load_pass(path: &Path) -> Result<PassInput> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read pass file {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse pass file {}", path.display()))
}

/// Run every pass in order, then the end-of-compilation closure check.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let mut processor = ViewModelInjectProcessor::new(options.processor_options.clone());
    let filer = options.output_dir.as_ref().map(FsFiler::new);
    let mut report = DiagnosticReport::default();
    let mut passes = Vec::new();

    for (index, path) in options.passes.iter().enumerate() {
        let pass = load_pass(path)?;
        let types = pass.types.len();
        debug!(pass = index + 1, types, "running pass");
        let outcome = processor.run_pass(&pass);

        let mut generated = Vec::new();
        for file in &outcome.files {
            if let Some(filer) = &filer {
                filer.write(file)?;
            }
            generated.push(file.path.clone());
        }
        let pass_report = DiagnosticReport {
            diagnostics: outcome.diagnostics.clone(),
        };
        passes.push(PassSummary {
            index: index + 1,
            types,
            generated,
            error_count: pass_report.error_count(),
            warning_count: pass_report.warning_count(),
        });
        report.extend(outcome.diagnostics);
        info!(
            pass = index + 1,
            generated = passes.last().map(|p| p.generated.len()).unwrap_or(0),
            "pass complete"
        );
    }

    report.extend(processor.finalize());

    let has_errors = report.has_errors();
    let mut result = RunResult {
        passes,
        report,
        output_dir: options.output_dir.clone(),
        report_path: None,
        has_errors,
    };

    let report_path = options.report_path.clone().or_else(|| {
        options
            .output_dir
            .as_ref()
            .map(|dir| dir.join("diagnostics_report.json"))
    });
    if let Some(path) = report_path {
        result.report_path = Some(write_diagnostics_report(&path, &result)?);
    }

    Ok(result)
}
