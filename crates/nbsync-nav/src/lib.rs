//! Navigation manifest maintenance for generated documentation pages.
//!
//! Docs sites keep their sidebar in a single JSON manifest, in one of two
//! shapes: a tabbed navigation object (tabs containing groups containing
//! pages) or a flat list of groups. This crate loads and saves the manifest
//! and registers page slugs through a schema strategy; the shape in use is
//! explicit configuration, never auto-detected.

pub mod manifest;
pub mod schema;

pub use manifest::{Manifest, ManifestError};
pub use schema::{FlatNav, NavSchema, SchemaError, SchemaKind, TabbedNav};
