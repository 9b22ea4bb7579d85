//! `cheatkit` — compiler for declarative documentation cheatsheets.
//!
//! Turns a nested declarative description (document, categories, entries,
//! commands, notes) into a validated, immutable document plus a serialized
//! form for downstream documentation browsers. Construction is a single
//! top-to-bottom pass through a [`builder::DocumentBuilder`]; structural
//! mistakes fail at the offending call, never in a later pass.

pub mod builder;
pub mod cli;
pub mod document;
pub mod error;
pub mod observability;
pub mod serialize;
pub mod sheets;

pub use builder::{DocumentBuilder, Scope};
pub use document::{Category, Document, Entry};
pub use error::{BuildError, CheatkitError, ConfigurationError, StateError, ValidationError};
