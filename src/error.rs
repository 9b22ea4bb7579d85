//! Error types for cheatsheet construction and the `cheatkit` binary.
//!
//! Construction failures are deterministic authoring-time errors: they are
//! raised synchronously at the offending builder call and are never
//! retryable. No partial document escapes a failed build.

use thiserror::Error;

use crate::builder::Scope;

/// A builder method was invoked while the construction state machine was
/// not in the state that method requires.
#[derive(Debug, Error)]
#[error("'{call}' is not valid while the builder is {actual} (expected {expected})")]
pub struct StateError {
    /// The offending builder method.
    pub call: &'static str,
    /// The scope the method requires.
    pub expected: Scope,
    /// The scope the builder was actually in.
    pub actual: Scope,
}

/// A scalar field was misused: set twice, set to an empty or malformed
/// value, or a duplicate category identifier was declared.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A set-once field received a second value.
    #[error("'{field}' has already been set for this scope")]
    AlreadySet {
        /// Name of the field.
        field: &'static str,
    },

    /// A required text field was empty after trimming whitespace.
    #[error("'{field}' must not be empty")]
    EmptyField {
        /// Name of the field.
        field: &'static str,
    },

    /// The search keyword contained whitespace.
    #[error("keyword '{value}' must not contain whitespace")]
    KeywordWhitespace {
        /// The rejected value.
        value: String,
    },

    /// The docset file name contained a character unsafe for file names.
    #[error("docset file name '{value}' contains a path separator or NUL")]
    UnsafeFileName {
        /// The rejected value.
        value: String,
    },

    /// A category identifier duplicates one already declared in this document.
    #[error("duplicate category id '{id}'")]
    DuplicateCategory {
        /// The duplicated identifier.
        id: String,
    },
}

/// A scope was closed without satisfying its minimum content requirement.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `end_entry` was called before `set_name`.
    #[error("entry closed without a name")]
    EntryWithoutName,

    /// `end_entry` was called with zero commands.
    #[error("entry '{name}' declares no commands")]
    EntryWithoutCommands {
        /// The entry's declared name.
        name: String,
    },

    /// `end_document` was called with zero categories.
    #[error("document declares no categories")]
    DocumentWithoutCategories,

    /// `end_document` was called before a required scalar field was set.
    #[error("required field '{field}' was never set")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

/// Errors that can occur while building a document.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A call was made in the wrong builder state.
    #[error(transparent)]
    State(#[from] StateError),

    /// A field was set twice, set empty, or duplicated an identifier.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A scope was closed without its minimum content.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level error type for the `cheatkit` binary.
#[derive(Debug, Error)]
pub enum CheatkitError {
    /// Document construction failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line usage.
    #[error("{0}")]
    Usage(String),
}
