//! Notebook source files and title derivation.

use std::path::{Path, PathBuf};

/// A notebook file queued for conversion, identified by its stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookSource {
    path: PathBuf,
    stem: String,
}

/// Errors that can occur when wrapping a notebook path.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Notebook file name is not valid UTF-8: {0}")]
    InvalidFileName(String),
}

impl NotebookSource {
    /// Wrap a notebook path, capturing its stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SourceError::InvalidFileName(path.display().to_string()))?
            .to_string();

        Ok(Self { path, stem })
    }

    /// Path to the `.ipynb` file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Human-readable page title: underscores become spaces, trimmed.
    pub fn title(&self) -> String {
        self.stem.replace('_', " ").trim().to_string()
    }

    /// File name of the final page: `<stem>.mdx`.
    pub fn page_file_name(&self) -> String {
        format!("{}.mdx", self.stem)
    }

    /// File name of the intermediate converter output: `<stem>.md`.
    pub fn intermediate_file_name(&self) -> String {
        format!("{}.md", self.stem)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn derives_stem_from_path() {
        let source = NotebookSource::from_path("notebooks/Getting_Started.ipynb").unwrap();

        assert_eq!(source.stem(), "Getting_Started");
        assert_eq!(source.path(), Path::new("notebooks/Getting_Started.ipynb"));
    }

    #[test]
    fn title_replaces_underscores_with_spaces() {
        let source = NotebookSource::from_path("Getting_Started.ipynb").unwrap();

        assert_eq!(source.title(), "Getting Started");
    }

    #[test]
    fn title_trims_surrounding_whitespace() {
        let source = NotebookSource::from_path("_Draft_Notes_.ipynb").unwrap();

        assert_eq!(source.title(), "Draft Notes");
    }

    #[test]
    fn title_keeps_single_word_stems() {
        let source = NotebookSource::from_path("Intro.ipynb").unwrap();

        assert_eq!(source.title(), "Intro");
    }

    #[test]
    fn builds_output_file_names() {
        let source = NotebookSource::from_path("nb/Data_Loading.ipynb").unwrap();

        assert_eq!(source.page_file_name(), "Data_Loading.mdx");
        assert_eq!(source.intermediate_file_name(), "Data_Loading.md");
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_utf8_file_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(&[0x66, 0x6f, 0xff, 0x2e, 0x69, 0x70]));
        let result = NotebookSource::from_path(path);

        assert!(matches!(result, Err(SourceError::InvalidFileName(_))));
    }
}
