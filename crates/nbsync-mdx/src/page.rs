//! Final page text assembly.

use crate::frontmatter::Frontmatter;

/// Convert CR-LF sequences to LF. Lone CR bytes are left as-is.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Frontmatter block followed by the normalized converter output.
pub fn compose_page(frontmatter: &Frontmatter, raw_body: &str) -> String {
    format!("{}{}", frontmatter.render(), normalize_line_endings(raw_body))
}
