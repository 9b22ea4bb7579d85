//! Built-in cheatsheet definitions.
//!
//! Curated sheets compiled into the binary, so the CLI works with zero
//! configuration: `cheatkit build rspec-expectations`. Each sheet is a
//! declaration function that runs the full builder pass on demand.

use crate::document::Document;
use crate::error::BuildError;

pub mod rspec_expectations;

/// A built-in cheatsheet compiled into the binary.
pub struct BuiltinSheet {
    /// Unique identifier (kebab-case, e.g. "rspec-expectations").
    pub name: &'static str,

    /// Short human-readable description.
    pub description: &'static str,

    /// Declaration pass producing the compiled document.
    pub build: fn() -> Result<Document, BuildError>,
}

/// Registry of all built-in sheets, in display order.
static BUILTIN_SHEETS: &[BuiltinSheet] = &[BuiltinSheet {
    name: "rspec-expectations",
    description: "RSpec Expectations 3.2 built-in matcher reference",
    build: rspec_expectations::build,
}];

/// Look up a sheet by exact name.
#[must_use]
pub fn find_sheet(name: &str) -> Option<&'static BuiltinSheet> {
    BUILTIN_SHEETS.iter().find(|s| s.name == name)
}

/// All built-in sheets in registry order.
#[must_use]
pub const fn list_sheets() -> &'static [BuiltinSheet] {
    BUILTIN_SHEETS
}

/// All sheet names in registry order.
#[must_use]
pub fn list_sheet_names() -> Vec<&'static str> {
    BUILTIN_SHEETS.iter().map(|s| s.name).collect()
}

/// Suggest a similar sheet name for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_sheet(input: &str) -> Option<String> {
    BUILTIN_SHEETS
        .iter()
        .map(|s| (s.name, strsim::damerau_levenshtein(input, s.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}
