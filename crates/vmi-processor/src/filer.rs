//! Generated-file records and the filesystem writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use vmi_javagen::JavaFile;
use vmi_model::ClassName;

/// One rendered compilation unit plus the declarations it originated from.
///
/// Originating elements are what incremental build tooling uses to decide
/// when a generated file must be invalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
    pub originating: Vec<ClassName>,
}

impl GeneratedFile {
    pub fn from_java(file: &JavaFile, originating: Vec<ClassName>) -> Self {
        Self {
            path: file.path(),
            content: file.render(),
            originating,
        }
    }
}

/// Writes generated files under an output root, creating package
/// directories as needed. Rewriting a file with identical content is not an
/// error; the host toolchain owns file-already-exists semantics.
#[derive(Debug, Clone)]
pub struct FsFiler {
    root: PathBuf,
}

impl FsFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write(&self, file: &GeneratedFile) -> Result<PathBuf> {
        let path = self.root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("write generated source {}", path.display()))?;
        debug!(path = %path.display(), "wrote generated source");
        Ok(path)
    }

    pub fn write_all(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        files.iter().map(|file| self.write(file)).collect()
    }
}
