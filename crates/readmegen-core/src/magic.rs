//! Magic placeholder lines and what they expand to
//!
//! A magic line is a whole template line of the form `{{ name }}\n`. Matching
//! is exact: a token with trailing spaces, different case or no newline is
//! ordinary text.

use std::collections::HashMap;

/// Expansion data for one magic token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicEntry {
    /// Capture name, also the alt text of the static image
    pub name: String,
    /// File pulled in with `include_relative` by the dynamic target
    pub dynamic_include: String,
    /// Image embedded by the static target; `None` drops the token there
    pub static_include: Option<String>,
}

impl MagicEntry {
    pub fn new(name: impl Into<String>, dynamic_include: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dynamic_include: dynamic_include.into(),
            static_include: None,
        }
    }

    pub fn with_static(mut self, static_include: impl Into<String>) -> Self {
        self.static_include = Some(static_include.into());
        self
    }

    /// The exact template line that triggers this entry
    pub fn token(&self) -> String {
        format!("{{{{ {} }}}}\n", self.name)
    }
}

/// Lookup table from exact template line to its expansion
#[derive(Debug, Clone, Default)]
pub struct MagicTable {
    entries: HashMap<String, MagicEntry>,
}

impl MagicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table shipped with the generator: the dependency list and the four live examples
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(MagicEntry::new("deps", "docs/deps.html"));
        for i in 0..4 {
            let page = format!("docs/github-pages-example-{i}.html");
            table.insert(MagicEntry::new(format!("ex{i}"), page.clone()).with_static(page));
        }
        table
    }

    /// Register an entry under its token, replacing any previous entry with the same name
    pub fn insert(&mut self, entry: MagicEntry) {
        self.entries.insert(entry.token(), entry);
    }

    pub fn lookup(&self, line: &str) -> Option<&MagicEntry> {
        self.entries.get(line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
