//! `cheatkit build` — compile a sheet and emit the serialized document.

use std::fs;

use crate::cli::args::{BuildArgs, DocumentFormat};
use crate::cli::commands::resolve_sheet;
use crate::error::CheatkitError;
use crate::serialize;

/// Compile a built-in sheet and write the serialized document to the
/// requested path, or stdout when no path is given.
///
/// # Errors
///
/// Returns a usage error for an unknown sheet name, a build error if the
/// declaration fails to compile, a serialization error, or an I/O error
/// when the output file cannot be written.
pub fn run(args: &BuildArgs) -> Result<(), CheatkitError> {
    let sheet = resolve_sheet(&args.name)?;
    let document = (sheet.build)()?;

    let serialized = match args.format {
        DocumentFormat::Json => serialize::to_json(&document)?,
        DocumentFormat::Yaml => serialize::to_yaml(&document)?,
    };

    if let Some(ref output_path) = args.output {
        fs::write(output_path, &serialized).map_err(|e| {
            CheatkitError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {e}", output_path.display()),
            ))
        })?;
        eprintln!("Wrote document to {}", output_path.display());
    } else {
        println!("{serialized}");
    }

    Ok(())
}
