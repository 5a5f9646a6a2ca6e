//! Page-domain model for notebook-derived MDX documentation.
//!
//! This crate provides the pure building blocks of a generated page: the
//! notebook source identity (stem and title), the fixed frontmatter header,
//! and assembly of the final page text from converter output.

pub mod frontmatter;
pub mod page;
pub mod source;

pub use frontmatter::Frontmatter;
pub use page::{compose_page, normalize_line_endings};
pub use source::{NotebookSource, SourceError};
