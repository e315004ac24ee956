//! Machine-readable diagnostics report.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use vmi_model::{Diagnostic, Severity};

use crate::runner::{PassSummary, RunResult};

const REPORT_SCHEMA: &str = "viewmodel-inject.diagnostics-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct DiagnosticsReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub passes: Vec<PassPayload>,
    pub diagnostics: Vec<DiagnosticJson>,
}

#[derive(Debug, Serialize)]
pub struct PassPayload {
    pub pass: usize,
    pub types: usize,
    pub generated: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticJson {
    pub severity: Severity,
    pub message: String,
    pub element: Option<String>,
}

pub fn write_diagnostics_report(path: &Path, result: &RunResult) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let payload = DiagnosticsReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        error_count: result.report.error_count(),
        warning_count: result.report.warning_count(),
        passes: result.passes.iter().map(pass_payload).collect(),
        diagnostics: result
            .report
            .diagnostics
            .iter()
            .map(diagnostic_json)
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(path.to_path_buf())
}

fn pass_payload(summary: &PassSummary) -> PassPayload {
    PassPayload {
        pass: summary.index,
        types: summary.types,
        generated: summary
            .generated
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
    }
}

fn diagnostic_json(diagnostic: &Diagnostic) -> DiagnosticJson {
    DiagnosticJson {
        severity: diagnostic.severity,
        message: diagnostic.message.clone(),
        element: diagnostic.element.as_ref().map(|e| e.reflection_name()),
    }
}
