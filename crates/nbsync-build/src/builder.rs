//! The notebook sync pipeline.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use nbsync_mdx::{compose_page, Frontmatter, NotebookSource, SourceError};
use nbsync_nav::{Manifest, ManifestError, NavSchema};

use crate::convert::{ConvertError, NotebookConverter};
use crate::discover::find_notebooks;

/// Filesystem layout for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory scanned for `.ipynb` files
    pub notebooks_dir: PathBuf,

    /// Directory the generated `.mdx` pages are written to
    pub pages_dir: PathBuf,

    /// Navigation manifest file
    pub manifest_path: PathBuf,
}

/// What a sync run did.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The notebook directory does not exist; nothing was read or written.
    SkippedMissingInput { notebooks_dir: PathBuf },

    /// The pipeline ran to completion.
    Completed(SyncReport),
}

/// Result of a completed sync run.
#[derive(Debug)]
pub struct SyncReport {
    /// Pages written, in input order
    pub pages: Vec<PathBuf>,

    /// Slugs newly added to the manifest
    pub slugs_added: Vec<String>,

    /// Total sync time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to scan notebooks: {0}")]
    ScanError(#[from] SourceError),

    #[error(transparent)]
    ConversionError(#[from] ConvertError),

    #[error(transparent)]
    ManifestError(#[from] ManifestError),

    #[error("Failed to read converter output: {0}")]
    ReadError(String),

    #[error("Failed to write page: {0}")]
    WriteError(String),
}

/// Runs the notebook → page → navigation pipeline.
pub struct SyncRunner {
    config: SyncConfig,
    converter: Box<dyn NotebookConverter>,
    schema: Box<dyn NavSchema>,
}

impl SyncRunner {
    /// Create a runner over the given layout, converter, and manifest schema.
    pub fn new(
        config: SyncConfig,
        converter: Box<dyn NotebookConverter>,
        schema: Box<dyn NavSchema>,
    ) -> Self {
        Self {
            config,
            converter,
            schema,
        }
    }

    /// Execute one full sync.
    ///
    /// The manifest is loaded before the first conversion and saved once
    /// after the last, so a conversion failure leaves the manifest file
    /// exactly as it was.
    pub fn run(&self) -> Result<SyncOutcome, SyncError> {
        let start = Instant::now();

        if !self.config.notebooks_dir.is_dir() {
            return Ok(SyncOutcome::SkippedMissingInput {
                notebooks_dir: self.config.notebooks_dir.clone(),
            });
        }

        let notebooks = find_notebooks(&self.config.notebooks_dir)?;
        let mut manifest = Manifest::load(&self.config.manifest_path)?;

        let mut pages = Vec::with_capacity(notebooks.len());
        let mut slugs_added = Vec::new();

        for notebook in &notebooks {
            tracing::info!("Converting {}", notebook.path().display());
            pages.push(self.build_page(notebook)?);

            let slug = self.schema.page_slug(notebook.stem());
            if manifest.ensure_page(self.schema.as_ref(), &slug)? {
                tracing::debug!("Added {} to {}", slug, manifest.path().display());
                slugs_added.push(slug);
            } else {
                tracing::debug!("{} already registered", slug);
            }
        }

        manifest.save()?;

        Ok(SyncOutcome::Completed(SyncReport {
            pages,
            slugs_added,
            duration_ms: start.elapsed().as_millis() as u64,
        }))
    }

    /// Convert one notebook and assemble its final page.
    fn build_page(&self, notebook: &NotebookSource) -> Result<PathBuf, SyncError> {
        fs::create_dir_all(&self.config.pages_dir).map_err(|e| {
            SyncError::WriteError(format!("{}: {}", self.config.pages_dir.display(), e))
        })?;

        let intermediate = self.config.pages_dir.join(notebook.intermediate_file_name());
        let page_path = self.config.pages_dir.join(notebook.page_file_name());

        self.converter.convert(notebook.path(), &intermediate)?;

        let body = fs::read_to_string(&intermediate)
            .map_err(|e| SyncError::ReadError(format!("{}: {}", intermediate.display(), e)))?;

        let frontmatter = Frontmatter::for_notebook(notebook.title());
        fs::write(&page_path, compose_page(&frontmatter, &body))
            .map_err(|e| SyncError::WriteError(format!("{}: {}", page_path.display(), e)))?;

        // The intermediate markdown is scratch output; losing it is not
        // worth failing the run over.
        if let Err(e) = fs::remove_file(&intermediate) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!("Could not remove {}: {}", intermediate.display(), e);
            }
        }

        Ok(page_path)
    }
}
