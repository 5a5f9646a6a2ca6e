//! Manifest file loading, mutation, and saving.
//!
//! The manifest is held as raw JSON rather than typed structs so that
//! unknown fields (theme colors, redirects, anchors) survive a round trip
//! untouched. Key order is preserved as well.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::schema::{NavSchema, SchemaError};

/// Errors raised while loading or saving a manifest file.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Read(String),

    #[error("Manifest is not valid JSON: {0}")]
    Parse(String),

    #[error("Failed to write manifest: {0}")]
    Write(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// A docs navigation manifest held in memory.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    root: Value,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ManifestError::Read(format!("{}: {}", path.display(), e)))?;

        let root: Value = serde_json::from_str(&text)
            .map_err(|e| ManifestError::Parse(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Register `slug` in the navigation tree, creating the target group if
    /// needed. Returns `true` when the manifest changed.
    pub fn ensure_page(&mut self, schema: &dyn NavSchema, slug: &str) -> Result<bool, ManifestError> {
        Ok(schema.ensure_page(&mut self.root, slug)?)
    }

    /// Whether `slug` is already registered under the schema's group.
    pub fn has_page(&self, schema: &dyn NavSchema, slug: &str) -> bool {
        schema.has_page(&self.root, slug)
    }

    /// Write the manifest back to its file, pretty-printed with a trailing
    /// newline.
    pub fn save(&self) -> Result<(), ManifestError> {
        let text = serde_json::to_string_pretty(&self.root)
            .map_err(|e| ManifestError::Write(format!("{}: {}", self.path.display(), e)))?;

        fs::write(&self.path, format!("{text}\n"))
            .map_err(|e| ManifestError::Write(format!("{}: {}", self.path.display(), e)))
    }

    /// Path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::schema::{FlatNav, TabbedNav};

    use super::*;

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = Manifest::load(&dir.path().join("docs.json")).unwrap_err();

        assert!(err.to_string().starts_with("Failed to read manifest:"));
    }

    #[test]
    fn load_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(&path, "{not json").unwrap();

        let err = Manifest::load(&path).unwrap_err();

        assert!(err.to_string().starts_with("Manifest is not valid JSON:"));
    }

    #[test]
    fn save_pretty_prints_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(&path, "{}").unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        manifest
            .ensure_page(&TabbedNav::default(), "notebooks/Intro")
            .unwrap();
        manifest.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();

        assert!(text.ends_with("\n"));
        assert!(!text.ends_with("\n\n"));
        assert!(text.contains("\n  \"navigation\""));
        assert_eq!(
            serde_json::from_str::<Value>(&text).unwrap(),
            json!({
                "navigation": {
                    "tabs": [
                        {
                            "tab": "Notebooks",
                            "groups": [
                                {"group": "Notebooks", "pages": ["notebooks/Intro"]}
                            ]
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn round_trip_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(
            &path,
            r#"{"zebra": 1, "theme": "dark", "navigation": {"tabs": []}, "apple": 2}"#,
        )
        .unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        manifest
            .ensure_page(&TabbedNav::default(), "notebooks/Intro")
            .unwrap();
        manifest.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let zebra = text.find("\"zebra\"").unwrap();
        let theme = text.find("\"theme\"").unwrap();
        let navigation = text.find("\"navigation\"").unwrap();
        let apple = text.find("\"apple\"").unwrap();

        assert!(zebra < theme && theme < navigation && navigation < apple);
    }

    #[test]
    fn save_keeps_non_ascii_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(
            &path,
            r#"{"name": "노트북 문서", "navigation": {"tabs": []}}"#,
        )
        .unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        manifest
            .ensure_page(&TabbedNav::default(), "notebooks/Intro")
            .unwrap();
        manifest.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();

        assert!(text.contains("노트북 문서"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn ensure_page_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(&path, "{}").unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        let schema = TabbedNav::default();

        assert!(manifest.ensure_page(&schema, "notebooks/Intro").unwrap());
        assert!(!manifest.ensure_page(&schema, "notebooks/Intro").unwrap());
        assert!(manifest.has_page(&schema, "notebooks/Intro"));
    }

    #[test]
    fn flat_manifest_keeps_existing_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mint.json");
        fs::write(
            &path,
            r#"{"navigation": [{"group": "Other", "pages": ["docs/other/page"]}]}"#,
        )
        .unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        manifest
            .ensure_page(&FlatNav::default(), "docs/notebooks/Intro")
            .unwrap();
        manifest.save().unwrap();

        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(
            saved,
            json!({
                "navigation": [
                    {"group": "Other", "pages": ["docs/other/page"]},
                    {"group": "Notebooks", "pages": ["docs/notebooks/Intro"]}
                ]
            })
        );
    }
}
