//! `cheatkit list` — list built-in sheets.

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::CheatkitError;
use crate::sheets;

/// List available built-in sheets, human-readable or as a JSON array.
///
/// # Errors
///
/// Returns a JSON error if output serialization fails.
pub fn run(args: &ListArgs) -> Result<(), CheatkitError> {
    let results = sheets::list_sheets();

    match args.format {
        OutputFormat::Json => {
            let json_entries: Vec<serde_json::Value> = results
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "description": s.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json_entries)?);
        }
        OutputFormat::Human => {
            let total = results.len();
            println!("Built-in Sheets ({total} available)\n");

            for s in results {
                println!("  {:<24}{}", s.name, s.description);
            }

            println!();
            println!("Compile a sheet: cheatkit build <name>");
            println!("Inspect layout:  cheatkit show <name>");
        }
    }

    Ok(())
}
