//! Pre-flight diagnostics for a sync run.

use std::path::{Path, PathBuf};

use anyhow::Result;

use nbsync_build::{find_notebooks, NbconvertConverter, NotebookConverter};
use nbsync_nav::Manifest;

use crate::config::{load_config, resolve};

/// Run the check command. Reports what a sync would do without writing
/// anything; exits non-zero if the converter or manifest is unusable.
pub fn run(config_path: &Path, root: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;
    let resolved = resolve(&file_config, root)?;
    let mut problems = 0;

    // Converter availability
    let converter = NbconvertConverter::new(resolved.converter_program);
    match converter.probe() {
        Ok(()) => tracing::info!("Converter `{}` is available", converter.name()),
        Err(e) => {
            problems += 1;
            tracing::error!("{}", e);
        }
    }

    // Notebook directory
    let notebooks = if resolved.sync.notebooks_dir.is_dir() {
        let notebooks = find_notebooks(&resolved.sync.notebooks_dir)?;
        tracing::info!(
            "Found {} notebooks in {}",
            notebooks.len(),
            resolved.sync.notebooks_dir.display()
        );
        notebooks
    } else {
        tracing::warn!(
            "No notebook directory at {}; a sync would be skipped",
            resolved.sync.notebooks_dir.display()
        );
        Vec::new()
    };

    // Manifest health and slug status
    match Manifest::load(&resolved.sync.manifest_path) {
        Ok(manifest) => {
            let mut pending = 0;
            for notebook in &notebooks {
                let slug = resolved.schema.page_slug(notebook.stem());
                if manifest.has_page(resolved.schema.as_ref(), &slug) {
                    tracing::debug!("{} already in navigation", slug);
                } else {
                    pending += 1;
                    tracing::info!("{} will be added to navigation", slug);
                }
            }
            tracing::info!(
                "Manifest {} is valid, {} of {} slugs pending",
                resolved.sync.manifest_path.display(),
                pending,
                notebooks.len()
            );
        }
        Err(e) => {
            problems += 1;
            tracing::error!("{}", e);
        }
    }

    if problems > 0 {
        anyhow::bail!("check found {} problem(s)", problems);
    }

    Ok(())
}
