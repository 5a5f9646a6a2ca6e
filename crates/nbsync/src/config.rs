//! Configuration file loading (nbsync.toml).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use nbsync_build::SyncConfig;
use nbsync_nav::{FlatNav, NavSchema, SchemaKind, TabbedNav};

/// Configuration file structure (nbsync.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_notebooks")]
    pub notebooks: String,
    #[serde(default = "default_docs")]
    pub docs: String,
    #[serde(default = "default_pages")]
    pub pages: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_tab")]
    pub tab: String,
    #[serde(default = "default_group")]
    pub group: String,
    /// Overrides the slug directory prefix the schema would use
    pub slug_prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

// Absent sections must resolve exactly like present-but-empty ones, so the
// Default impls reuse the serde default functions.

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            notebooks: default_notebooks(),
            docs: default_docs(),
            pages: default_pages(),
            manifest: default_manifest(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            tab: default_tab(),
            group: default_group(),
            slug_prefix: None,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}
fn default_notebooks() -> String {
    "notebooks".to_string()
}
fn default_docs() -> String {
    "docs".to_string()
}
fn default_pages() -> String {
    "notebooks".to_string()
}
fn default_manifest() -> String {
    "docs/docs.json".to_string()
}
fn default_schema() -> String {
    "tabs".to_string()
}
fn default_tab() -> String {
    "Notebooks".to_string()
}
fn default_group() -> String {
    "Notebooks".to_string()
}
fn default_program() -> String {
    "jupyter".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Settings for one invocation, with paths rooted and the schema chosen.
pub struct ResolvedConfig {
    pub sync: SyncConfig,
    pub schema: Box<dyn NavSchema>,
    pub converter_program: String,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("sync", &self.sync)
            .field("schema", &self.schema.name())
            .field("converter_program", &self.converter_program)
            .finish()
    }
}

/// Resolve file settings plus the CLI root override into concrete paths and
/// a schema strategy.
pub fn resolve(file: &ConfigFile, root_override: Option<PathBuf>) -> Result<ResolvedConfig> {
    let root = root_override.unwrap_or_else(|| PathBuf::from(&file.paths.root));

    let kind = SchemaKind::parse(&file.navigation.schema).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown navigation schema `{}` (expected \"tabs\" or \"flat\")",
            file.navigation.schema
        )
    })?;

    // With default paths these prefixes reproduce the conventional slugs:
    // notebooks/<stem> for tabbed manifests, docs/notebooks/<stem> for flat.
    let schema: Box<dyn NavSchema> = match kind {
        SchemaKind::Tabbed => {
            let prefix = file
                .navigation
                .slug_prefix
                .clone()
                .unwrap_or_else(|| file.paths.pages.clone());
            Box::new(
                TabbedNav::new(file.navigation.tab.clone(), file.navigation.group.clone())
                    .with_slug_prefix(prefix),
            )
        }
        SchemaKind::Flat => {
            let prefix = file
                .navigation
                .slug_prefix
                .clone()
                .unwrap_or_else(|| format!("{}/{}", file.paths.docs, file.paths.pages));
            Box::new(FlatNav::new(file.navigation.group.clone()).with_slug_prefix(prefix))
        }
    };

    let sync = SyncConfig {
        notebooks_dir: root.join(&file.paths.notebooks),
        pages_dir: root.join(&file.paths.docs).join(&file.paths.pages),
        manifest_path: root.join(&file.paths.manifest),
    };

    Ok(ResolvedConfig {
        sync,
        schema,
        converter_program: file.converter.program.clone(),
    })
}
