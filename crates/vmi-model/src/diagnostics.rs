use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ClassName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A message attached to a specific declaration, or global when `element`
/// is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ClassName>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, element: Option<ClassName>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            element,
        }
    }

    pub fn warning(message: impl Into<String>, element: Option<ClassName>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            element,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.element {
            Some(element) => write!(f, "{severity}: {} [{element}]", self.message),
            None => write!(f, "{severity}: {}", self.message),
        }
    }
}

/// All diagnostics produced by one run or one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }
}
