//! Scoped construction of cheatsheet documents.
//!
//! A [`DocumentBuilder`] interprets a nested declaration (document,
//! categories, entries, fields) into a validated [`Document`]. The
//! builder enforces a strict tree shape through a small state machine:
//!
//! ```text
//! Idle → DocumentOpen → CategoryOpen → EntryOpen → CategoryOpen → DocumentOpen → Closed
//! ```
//!
//! Only the matching `begin_*`/`set_*`/`end_*` calls are legal in each
//! state; anything else fails with a [`StateError`] naming the expected
//! state. Validation is incremental: each `end_*` call checks its own
//! scope's minimum content, so errors surface close to their cause.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::document::{Category, Document, Entry};
use crate::error::{BuildError, ConfigurationError, StateError, ValidationError};

/// The currently-open construction context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// No document has been opened yet.
    Idle,
    /// A document is open; scalar fields and categories may be declared.
    DocumentOpen,
    /// A category is open; entries may be declared.
    CategoryOpen,
    /// An entry is open; name, commands, and notes may be declared.
    EntryOpen,
    /// The document was closed successfully. Terminal.
    Closed,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::DocumentOpen => write!(f, "inside a document"),
            Self::CategoryOpen => write!(f, "inside a category"),
            Self::EntryOpen => write!(f, "inside an entry"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Default)]
struct PartialDocument {
    title: Option<String>,
    docset_file_name: Option<String>,
    keyword: Option<String>,
    introduction: Option<String>,
    categories: Vec<Category>,
    seen_ids: HashSet<String>,
}

#[derive(Debug)]
struct PartialCategory {
    id: String,
    entries: Vec<Entry>,
}

#[derive(Debug, Default)]
struct PartialEntry {
    name: Option<String>,
    commands: Vec<String>,
    notes: Option<String>,
}

/// Builder for a single [`Document`].
///
/// One builder produces at most one document; after a successful
/// [`end_document`](Self::end_document) the builder is closed and every
/// further call fails. Create a fresh builder for another document.
///
/// Not safe for concurrent use: the builder holds mutable scope state.
/// The produced [`Document`] is immutable and freely shareable.
#[derive(Debug)]
pub struct DocumentBuilder {
    scope: Scope,
    doc: PartialDocument,
    category: Option<PartialCategory>,
    entry: Option<PartialEntry>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Creates an idle builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scope: Scope::Idle,
            doc: PartialDocument::default(),
            category: None,
            entry: None,
        }
    }

    /// Current scope, mainly useful in error reporting and tests.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    fn require(&self, call: &'static str, expected: Scope) -> Result<(), StateError> {
        if self.scope == expected {
            Ok(())
        } else {
            Err(StateError {
                call,
                expected,
                actual: self.scope,
            })
        }
    }

    fn entry_mut(&mut self, call: &'static str) -> Result<&mut PartialEntry, StateError> {
        match (self.scope, self.entry.as_mut()) {
            (Scope::EntryOpen, Some(entry)) => Ok(entry),
            _ => Err(StateError {
                call,
                expected: Scope::EntryOpen,
                actual: self.scope,
            }),
        }
    }

    /// Opens the document scope. Not reentrant: fails if a document is
    /// already open (or was already closed) on this builder.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] unless the builder is idle.
    pub fn begin_document(&mut self) -> Result<&mut Self, BuildError> {
        self.require("begin_document", Scope::Idle)?;
        debug!("opening document scope");
        self.scope = Scope::DocumentOpen;
        Ok(self)
    }

    /// Sets the document title. Set-once; trimmed; must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the document scope, or
    /// [`BuildError::Configuration`] on a repeated or empty value.
    pub fn set_title(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        self.require("set_title", Scope::DocumentOpen)?;
        set_once(&mut self.doc.title, "title", value)?;
        Ok(self)
    }

    /// Sets the docset artifact file name. Set-once; trimmed; must be
    /// non-empty and contain no path separator or NUL.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the document scope, or
    /// [`BuildError::Configuration`] on a repeated, empty, or unsafe value.
    pub fn set_docset_file_name(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        self.require("set_docset_file_name", Scope::DocumentOpen)?;
        let trimmed = value.trim();
        if trimmed.contains(['/', '\\', '\0']) {
            return Err(ConfigurationError::UnsafeFileName {
                value: trimmed.to_string(),
            }
            .into());
        }
        set_once(&mut self.doc.docset_file_name, "docsetFileName", value)?;
        Ok(self)
    }

    /// Sets the initial search keyword. Set-once; trimmed; must be
    /// non-empty and contain no whitespace at all, since it is used as a
    /// lookup prefix.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the document scope, or
    /// [`BuildError::Configuration`] on a repeated, empty, or
    /// whitespace-bearing value.
    pub fn set_keyword(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        self.require("set_keyword", Scope::DocumentOpen)?;
        let trimmed = value.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::KeywordWhitespace {
                value: trimmed.to_string(),
            }
            .into());
        }
        set_once(&mut self.doc.keyword, "keyword", value)?;
        Ok(self)
    }

    /// Sets the optional long-form introduction. Set-once; an empty value
    /// is rejected, omit the call instead.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the document scope, or
    /// [`BuildError::Configuration`] on a repeated or empty value.
    pub fn set_introduction(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        self.require("set_introduction", Scope::DocumentOpen)?;
        set_once(&mut self.doc.introduction, "introduction", value)?;
        Ok(self)
    }

    /// Opens a category scope. The identifier doubles as the category
    /// title and must be unique (case-sensitive) within the document.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the document scope, or
    /// [`BuildError::Configuration`] on an empty or duplicate identifier.
    pub fn begin_category(&mut self, id: &str) -> Result<&mut Self, BuildError> {
        self.require("begin_category", Scope::DocumentOpen)?;
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigurationError::EmptyField { field: "category id" }.into());
        }
        if !self.doc.seen_ids.insert(id.to_string()) {
            return Err(ConfigurationError::DuplicateCategory { id: id.to_string() }.into());
        }
        self.category = Some(PartialCategory {
            id: id.to_string(),
            entries: Vec::new(),
        });
        self.scope = Scope::CategoryOpen;
        Ok(self)
    }

    /// Opens an entry scope within the current category.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the category scope.
    pub fn begin_entry(&mut self) -> Result<&mut Self, BuildError> {
        self.require("begin_entry", Scope::CategoryOpen)?;
        self.entry = Some(PartialEntry::default());
        self.scope = Scope::EntryOpen;
        Ok(self)
    }

    /// Sets the entry's human-readable label. Set-once, required.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the entry scope, or
    /// [`BuildError::Configuration`] on a repeated or empty value.
    pub fn set_name(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        let entry = self.entry_mut("set_name")?;
        set_once(&mut entry.name, "name", value)?;
        Ok(self)
    }

    /// Adds one command token to the entry. Repeatable; each entry needs
    /// at least one. Duplicate tokens across entries are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the entry scope, or
    /// [`BuildError::Configuration`] on an empty token.
    pub fn add_command(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        let trimmed = value.trim();
        let empty = trimmed.is_empty();
        let entry = self.entry_mut("add_command")?;
        if empty {
            return Err(ConfigurationError::EmptyField { field: "command" }.into());
        }
        entry.commands.push(trimmed.to_string());
        Ok(self)
    }

    /// Sets the entry's optional notes. Set-once; the text is opaque to
    /// the compiler and may embed fenced code blocks.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the entry scope, or
    /// [`BuildError::Configuration`] on a repeated or empty value.
    pub fn set_notes(&mut self, value: &str) -> Result<&mut Self, BuildError> {
        let entry = self.entry_mut("set_notes")?;
        set_once(&mut entry.notes, "notes", value)?;
        Ok(self)
    }

    /// Closes the entry scope, validating its minimum content.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the entry scope, or
    /// [`BuildError::Validation`] if the entry has no name or no commands.
    pub fn end_entry(&mut self) -> Result<&mut Self, BuildError> {
        self.require("end_entry", Scope::EntryOpen)?;
        let (entry, category) = match (self.entry.take(), self.category.as_mut()) {
            (Some(entry), Some(category)) => (entry, category),
            _ => {
                return Err(StateError {
                    call: "end_entry",
                    expected: Scope::EntryOpen,
                    actual: self.scope,
                }
                .into());
            }
        };
        let Some(name) = entry.name else {
            return Err(ValidationError::EntryWithoutName.into());
        };
        if entry.commands.is_empty() {
            return Err(ValidationError::EntryWithoutCommands { name }.into());
        }
        category
            .entries
            .push(Entry::new(name, entry.commands, entry.notes));
        self.scope = Scope::CategoryOpen;
        Ok(self)
    }

    /// Closes the category scope.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the category scope.
    pub fn end_category(&mut self) -> Result<&mut Self, BuildError> {
        self.require("end_category", Scope::CategoryOpen)?;
        let Some(category) = self.category.take() else {
            return Err(StateError {
                call: "end_category",
                expected: Scope::CategoryOpen,
                actual: self.scope,
            }
            .into());
        };
        if category.entries.is_empty() {
            warn!(id = %category.id, "category declared with no entries");
        }
        self.doc
            .categories
            .push(Category::new(category.id, category.entries));
        self.scope = Scope::DocumentOpen;
        Ok(self)
    }

    /// Closes the document scope and returns the finished, immutable
    /// [`Document`]. The builder is closed afterwards and cannot be
    /// reused.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::State`] outside the document scope, or
    /// [`BuildError::Validation`] if a required scalar field was never
    /// set or no categories were declared.
    pub fn end_document(&mut self) -> Result<Document, BuildError> {
        self.require("end_document", Scope::DocumentOpen)?;
        let doc = std::mem::take(&mut self.doc);
        let (title, docset_file_name, keyword) =
            match (doc.title, doc.docset_file_name, doc.keyword) {
                (Some(title), Some(file_name), Some(keyword)) => (title, file_name, keyword),
                (None, ..) => {
                    return Err(ValidationError::MissingField { field: "title" }.into());
                }
                (_, None, _) => {
                    return Err(ValidationError::MissingField {
                        field: "docsetFileName",
                    }
                    .into());
                }
                (.., None) => {
                    return Err(ValidationError::MissingField { field: "keyword" }.into());
                }
            };
        if doc.categories.is_empty() {
            return Err(ValidationError::DocumentWithoutCategories.into());
        }
        self.scope = Scope::Closed;
        debug!(title = %title, categories = doc.categories.len(), "document closed");
        Ok(Document::new(
            title,
            docset_file_name,
            keyword,
            doc.introduction,
            doc.categories,
        ))
    }
}

/// Stores a trimmed value into a set-once slot.
fn set_once(
    slot: &mut Option<String>,
    field: &'static str,
    value: &str,
) -> Result<(), ConfigurationError> {
    if slot.is_some() {
        return Err(ConfigurationError::AlreadySet { field });
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigurationError::EmptyField { field });
    }
    *slot = Some(trimmed.to_string());
    Ok(())
}
