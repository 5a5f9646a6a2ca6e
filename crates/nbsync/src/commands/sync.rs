//! Notebook sync command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use nbsync_build::{NbconvertConverter, SyncOutcome, SyncRunner};

use crate::config::{load_config, resolve};

/// Run the sync command.
pub fn run(config_path: &Path, root: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;
    let resolved = resolve(&file_config, root)?;

    let runner = SyncRunner::new(
        resolved.sync,
        Box::new(NbconvertConverter::new(resolved.converter_program)),
        resolved.schema,
    );

    match runner.run()? {
        SyncOutcome::SkippedMissingInput { notebooks_dir } => {
            tracing::info!("No notebook directory at {}, skipping sync", notebooks_dir.display());
        }
        SyncOutcome::Completed(report) => {
            tracing::info!(
                "Synced {} notebooks ({} new navigation entries) in {}ms",
                report.pages.len(),
                report.slugs_added.len(),
                report.duration_ms
            );
        }
    }

    Ok(())
}
