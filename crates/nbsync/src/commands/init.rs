//! Initialize notebook syncing in a project.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use nbsync_nav::SchemaKind;

use crate::config::{load_config, ConfigFile};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing nbsync...");

    let file_config = effective_config(config_path, yes)?;
    let root = PathBuf::from(&file_config.paths.root);

    // Notebook source directory
    let notebooks_dir = root.join(&file_config.paths.notebooks);
    if !notebooks_dir.exists() {
        fs::create_dir_all(&notebooks_dir).context("Failed to create notebooks directory")?;
        tracing::info!("Created {}", notebooks_dir.display());
    }

    // Default config
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    // Manifest skeleton, only when no manifest exists at all
    let manifest_path = root.join(&file_config.paths.manifest);
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent).context("Failed to create docs directory")?;
    }

    if !manifest_path.exists() {
        let skeleton = match SchemaKind::parse(&file_config.navigation.schema) {
            Some(SchemaKind::Tabbed) => DEFAULT_TABBED_MANIFEST,
            Some(SchemaKind::Flat) => DEFAULT_FLAT_MANIFEST,
            None => anyhow::bail!(
                "Unknown navigation schema `{}` (expected \"tabs\" or \"flat\")",
                file_config.navigation.schema
            ),
        };
        fs::write(&manifest_path, skeleton)
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;
        tracing::info!("Created {}", manifest_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!(
        "Drop .ipynb files into {} and run 'nbsync' to publish them.",
        notebooks_dir.display()
    );

    Ok(())
}

/// Config the scaffold follows: an existing file is honored so new paths
/// and the manifest skeleton land where it points. With `--yes` a file that
/// fails to parse falls back to defaults, since it is about to be replaced.
fn effective_config(config_path: &Path, yes: bool) -> Result<ConfigFile> {
    if yes {
        return match load_config(config_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Ok(ConfigFile::default())
            }
        };
    }

    load_config(config_path)
}

const DEFAULT_CONFIG: &str = r#"# nbsync configuration

[paths]
# Project root all other paths are resolved against
root = "."

# Directory scanned for .ipynb files
notebooks = "notebooks"

# Docs site source directory
docs = "docs"

# Subdirectory of docs/ that receives generated pages
pages = "notebooks"

# Navigation manifest to keep in sync
manifest = "docs/docs.json"

[navigation]
# Manifest shape: "tabs" (docs.json) or "flat" (legacy mint.json)
schema = "tabs"

# Tab and group that receive generated pages
tab = "Notebooks"
group = "Notebooks"

# Override the slug directory prefix (defaults follow the schema)
# slug_prefix = "notebooks"

[converter]
# Program that provides nbconvert
program = "jupyter"
"#;

const DEFAULT_TABBED_MANIFEST: &str = r#"{
  "name": "Documentation",
  "navigation": {
    "tabs": []
  }
}
"#;

const DEFAULT_FLAT_MANIFEST: &str = r#"{
  "name": "Documentation",
  "navigation": []
}
"#;
