//! External notebook-to-markdown conversion.

use std::path::Path;
use std::process::Command;

/// Errors that can occur while running the external converter.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to run `{program}`: {message}")]
    SpawnError { program: String, message: String },

    #[error("Conversion failed for {notebook}: {status}")]
    ExitError { notebook: String, status: String },

    #[error("`{program} --version` failed: {status}")]
    ProbeError { program: String, status: String },
}

/// Converts one notebook file into a markdown file on disk.
pub trait NotebookConverter: Send + Sync {
    /// Program name, for logs and diagnostics.
    fn name(&self) -> &str;

    /// Convert `notebook`, writing markdown to `markdown_out`.
    fn convert(&self, notebook: &Path, markdown_out: &Path) -> Result<(), ConvertError>;

    /// Verify the underlying tool is runnable.
    fn probe(&self) -> Result<(), ConvertError>;
}

/// Converter backed by `jupyter nbconvert`.
#[derive(Debug, Clone)]
pub struct NbconvertConverter {
    program: String,
}

impl NbconvertConverter {
    /// Use the given program (normally `jupyter`) as the converter.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NbconvertConverter {
    fn default() -> Self {
        Self::new("jupyter")
    }
}

impl NotebookConverter for NbconvertConverter {
    fn name(&self) -> &str {
        &self.program
    }

    fn convert(&self, notebook: &Path, markdown_out: &Path) -> Result<(), ConvertError> {
        let out_name = markdown_out
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let out_dir = markdown_out.parent().unwrap_or_else(|| Path::new("."));

        // nbconvert resolves --output relative to --output-dir, so the
        // target is passed as a bare file name plus its parent.
        let status = Command::new(&self.program)
            .arg("nbconvert")
            .arg("--to")
            .arg("markdown")
            .arg("--output")
            .arg(&out_name)
            .arg(notebook)
            .arg("--output-dir")
            .arg(out_dir)
            .status()
            .map_err(|e| ConvertError::SpawnError {
                program: self.program.clone(),
                message: format!("{e}. Is `{}` installed?", self.program),
            })?;

        if !status.success() {
            return Err(ConvertError::ExitError {
                notebook: notebook.display().to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }

    fn probe(&self) -> Result<(), ConvertError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| ConvertError::SpawnError {
                program: self.program.clone(),
                message: format!("{e}. Is `{}` installed?", self.program),
            })?;

        if !output.status.success() {
            return Err(ConvertError::ProbeError {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }

        Ok(())
    }
}
