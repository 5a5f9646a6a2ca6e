//! Manifest schema strategies.
//!
//! Each strategy knows where the generated-pages group lives inside the
//! manifest tree and how page slugs are spelled there. Intermediate nodes
//! are created on demand; nodes that exist with the wrong JSON type are a
//! hard error rather than a silent overwrite.

use serde_json::{Map, Value};

/// Which manifest shape a docs site uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// `navigation` object containing `tabs` (docs.json).
    Tabbed,
    /// `navigation` as a flat array of groups (legacy mint.json).
    Flat,
}

impl SchemaKind {
    /// Parse a configuration string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tabs" => Some(Self::Tabbed),
            "flat" => Some(Self::Flat),
            _ => None,
        }
    }
}

/// Errors raised when a manifest node has the wrong shape for the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Unexpected manifest shape: {path} is not {expected}")]
    Shape { path: String, expected: &'static str },
}

/// Trait for manifest-schema-specific navigation handling.
pub trait NavSchema: Send + Sync {
    /// Schema identifier (e.g. "tabs", "flat").
    fn name(&self) -> &'static str;

    /// Manifest slug for a notebook stem.
    fn page_slug(&self, stem: &str) -> String;

    /// Locate or create the generated-pages group inside `root` and append
    /// `slug` if it is not already present.
    ///
    /// Returns `true` when the slug was inserted, `false` when it was
    /// already registered.
    fn ensure_page(&self, root: &mut Value, slug: &str) -> Result<bool, SchemaError>;

    /// Whether `slug` is already registered, without modifying anything.
    fn has_page(&self, root: &Value, slug: &str) -> bool;
}

/// Tabbed navigation: `navigation.tabs[].groups[].pages` (docs.json).
#[derive(Debug, Clone)]
pub struct TabbedNav {
    tab: String,
    group: String,
    slug_prefix: String,
}

impl TabbedNav {
    /// Strategy targeting the given tab and group.
    pub fn new(tab: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            group: group.into(),
            slug_prefix: "notebooks".to_string(),
        }
    }

    /// Override the directory prefix used in page slugs.
    pub fn with_slug_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slug_prefix = prefix.into();
        self
    }
}

impl Default for TabbedNav {
    fn default() -> Self {
        Self::new("Notebooks", "Notebooks")
    }
}

impl NavSchema for TabbedNav {
    fn name(&self) -> &'static str {
        "tabs"
    }

    fn page_slug(&self, stem: &str) -> String {
        format!("{}/{}", self.slug_prefix, stem)
    }

    fn ensure_page(&self, root: &mut Value, slug: &str) -> Result<bool, SchemaError> {
        let nav = entry(root, "navigation", "manifest root", new_object)?;
        let tabs = entry(nav, "tabs", "navigation", new_array)?;
        let tabs = as_array(tabs, "navigation.tabs")?;

        let tab = find_or_push(tabs, "tab", &self.tab);
        let groups = entry(tab, "groups", "navigation.tabs[]", new_array)?;
        let groups = as_array(groups, "navigation.tabs[].groups")?;

        let group = find_or_push(groups, "group", &self.group);
        let pages = entry(group, "pages", "navigation.tabs[].groups[]", new_array)?;
        let pages = as_array(pages, "navigation.tabs[].groups[].pages")?;

        Ok(push_if_absent(pages, slug))
    }

    fn has_page(&self, root: &Value, slug: &str) -> bool {
        root.get("navigation")
            .and_then(|nav| nav.get("tabs"))
            .and_then(Value::as_array)
            .and_then(|tabs| find_named(tabs, "tab", &self.tab))
            .and_then(|tab| tab.get("groups"))
            .and_then(Value::as_array)
            .and_then(|groups| find_named(groups, "group", &self.group))
            .and_then(|group| group.get("pages"))
            .and_then(Value::as_array)
            .is_some_and(|pages| pages.iter().any(|p| p.as_str() == Some(slug)))
    }
}

/// Flat navigation: `navigation[].pages` (legacy mint.json).
#[derive(Debug, Clone)]
pub struct FlatNav {
    group: String,
    slug_prefix: String,
}

impl FlatNav {
    /// Strategy targeting the given group.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            slug_prefix: "docs/notebooks".to_string(),
        }
    }

    /// Override the directory prefix used in page slugs.
    pub fn with_slug_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slug_prefix = prefix.into();
        self
    }
}

impl Default for FlatNav {
    fn default() -> Self {
        Self::new("Notebooks")
    }
}

impl NavSchema for FlatNav {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn page_slug(&self, stem: &str) -> String {
        format!("{}/{}", self.slug_prefix, stem)
    }

    fn ensure_page(&self, root: &mut Value, slug: &str) -> Result<bool, SchemaError> {
        let nav = entry(root, "navigation", "manifest root", new_array)?;
        let groups = as_array(nav, "navigation")?;

        let group = find_or_push(groups, "group", &self.group);
        let pages = entry(group, "pages", "navigation[]", new_array)?;
        let pages = as_array(pages, "navigation[].pages")?;

        Ok(push_if_absent(pages, slug))
    }

    fn has_page(&self, root: &Value, slug: &str) -> bool {
        root.get("navigation")
            .and_then(Value::as_array)
            .and_then(|groups| find_named(groups, "group", &self.group))
            .and_then(|group| group.get("pages"))
            .and_then(Value::as_array)
            .is_some_and(|pages| pages.iter().any(|p| p.as_str() == Some(slug)))
    }
}

fn new_object() -> Value {
    Value::Object(Map::new())
}

fn new_array() -> Value {
    Value::Array(Vec::new())
}

/// Fetch `key` from `value` (which must be a JSON object), inserting
/// `default()` when the key is missing.
fn entry<'a>(
    value: &'a mut Value,
    key: &str,
    value_path: &str,
    default: fn() -> Value,
) -> Result<&'a mut Value, SchemaError> {
    let obj = value.as_object_mut().ok_or_else(|| SchemaError::Shape {
        path: value_path.to_string(),
        expected: "an object",
    })?;

    Ok(obj.entry(key).or_insert_with(default))
}

fn as_array<'a>(value: &'a mut Value, path: &str) -> Result<&'a mut Vec<Value>, SchemaError> {
    value.as_array_mut().ok_or_else(|| SchemaError::Shape {
        path: path.to_string(),
        expected: "an array",
    })
}

/// Find the entry whose `key` field equals `name`, appending a fresh
/// `{key: name}` object when none matches. Entries that are not objects or
/// lack the field never match and are left alone.
fn find_or_push<'a>(items: &'a mut Vec<Value>, key: &str, name: &str) -> &'a mut Value {
    let idx = match items
        .iter()
        .position(|item| item.get(key).and_then(Value::as_str) == Some(name))
    {
        Some(i) => i,
        None => {
            let mut fresh = Map::new();
            fresh.insert(key.to_string(), Value::String(name.to_string()));
            items.push(Value::Object(fresh));
            items.len() - 1
        }
    };

    &mut items[idx]
}

fn find_named<'a>(items: &'a [Value], key: &str, name: &str) -> Option<&'a Value> {
    items
        .iter()
        .find(|item| item.get(key).and_then(Value::as_str) == Some(name))
}

/// Append `slug` unless an equal string entry already exists.
fn push_if_absent(pages: &mut Vec<Value>, slug: &str) -> bool {
    if pages.iter().any(|p| p.as_str() == Some(slug)) {
        return false;
    }

    pages.push(Value::String(slug.to_string()));
    true
}
