//! Immutable cheatsheet document model.
//!
//! A [`Document`] is produced exactly once by a
//! [`DocumentBuilder`](crate::builder::DocumentBuilder) pass and is
//! read-only thereafter. Regenerating content means re-running the whole
//! build from a fresh declaration.

use serde::Serialize;

/// A complete cheatsheet definition: title, docset metadata, and an
/// ordered sequence of categories.
///
/// Category order, entry order within a category, and command order within
/// an entry all reflect declaration order and are meaningful downstream
/// (they drive rendering order).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    title: String,
    docset_file_name: String,
    keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    introduction: Option<String>,
    categories: Vec<Category>,
}

/// A named grouping of related entries, unique by identifier within its
/// document. The identifier doubles as the category's display title.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: String,
    entries: Vec<Entry>,
}

/// One documented API surface item: a label, one or more command tokens,
/// and optional explanatory notes.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    name: String,
    commands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Document {
    pub(crate) const fn new(
        title: String,
        docset_file_name: String,
        keyword: String,
        introduction: Option<String>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            title,
            docset_file_name,
            keyword,
            introduction,
            categories,
        }
    }

    /// Display title of the cheatsheet.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// File name for the generated docset artifact.
    #[must_use]
    pub fn docset_file_name(&self) -> &str {
        &self.docset_file_name
    }

    /// Initial search keyword for the docset.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Optional long-form introduction text.
    #[must_use]
    pub fn introduction(&self) -> Option<&str> {
        self.introduction.as_deref()
    }

    /// Categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Category {
    pub(crate) const fn new(id: String, entries: Vec<Entry>) -> Self {
        Self { id, entries }
    }

    /// Unique identifier, also used as the category title.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl Entry {
    pub(crate) const fn new(name: String, commands: Vec<String>, notes: Option<String>) -> Self {
        Self {
            name,
            commands,
            notes,
        }
    }

    /// Human-readable label. Need not be unique across entries.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command tokens in declaration order. Always at least one.
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Optional long-form notes. May embed fenced code blocks; the
    /// compiler treats the contents as opaque text.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
