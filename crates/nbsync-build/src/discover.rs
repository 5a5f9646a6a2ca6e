//! Notebook discovery.

use std::path::Path;

use walkdir::WalkDir;

use nbsync_mdx::{NotebookSource, SourceError};

/// Collect the `.ipynb` files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into, so checkpoint folders and nested
/// archives stay invisible to the sync.
pub fn find_notebooks(dir: &Path) -> Result<Vec<NotebookSource>, SourceError> {
    let mut notebooks = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some("ipynb") {
            continue;
        }

        notebooks.push(NotebookSource::from_path(path)?);
    }

    notebooks.sort_by(|a, b| a.path().cmp(b.path()));

    Ok(notebooks)
}
