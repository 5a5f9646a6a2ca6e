//! MDX frontmatter rendering.

/// The metadata header written at the top of every generated page.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter {
    /// Page title
    pub title: String,

    /// Page description
    pub description: String,
}

impl Frontmatter {
    /// Build the header for a notebook page title.
    ///
    /// The description is templated from the title as `Notebook: <title>`.
    pub fn for_notebook(title: impl Into<String>) -> Self {
        let title = title.into();
        let description = format!("Notebook: {title}");

        Self { title, description }
    }

    /// Render the `---`-delimited YAML block, followed by a blank line.
    ///
    /// Both values are double-quoted so titles containing `:` or `#` stay
    /// valid YAML.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: \"{}\"\ndescription: \"{}\"\n---\n\n",
            quote_escape(&self.title),
            quote_escape(&self.description)
        )
    }
}

/// Escape a value for use inside a double-quoted YAML scalar.
fn quote_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
