//! Sync pipeline for notebook-derived documentation.
//!
//! Discovers `.ipynb` sources, runs each through an external
//! markdown converter, assembles the final MDX pages, and registers their
//! slugs in the site's navigation manifest.

pub mod builder;
pub mod convert;
pub mod discover;

pub use builder::{SyncConfig, SyncError, SyncOutcome, SyncReport, SyncRunner};
pub use convert::{ConvertError, NbconvertConverter, NotebookConverter};
pub use discover::find_notebooks;
