//! Subcommand handlers.

pub mod build;
pub mod list;
pub mod show;

use std::fmt::Write as _;

use crate::error::CheatkitError;
use crate::sheets::{self, BuiltinSheet};

/// Resolves a sheet name, producing a usage error with a typo suggestion
/// and the full sheet listing when the name is unknown.
fn resolve_sheet(name: &str) -> Result<&'static BuiltinSheet, CheatkitError> {
    sheets::find_sheet(name).ok_or_else(|| {
        let mut message = format!("Unknown sheet '{name}'");

        if let Some(suggestion) = sheets::suggest_sheet(name) {
            let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
        }

        message.push_str("\n\nAvailable sheets:");
        for sheet in sheets::list_sheets() {
            let _ = write!(message, "\n  {:<24}{}", sheet.name, sheet.description);
        }

        message.push_str("\n\nUse 'cheatkit list' for full details.");
        CheatkitError::Usage(message)
    })
}
