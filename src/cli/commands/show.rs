//! `cheatkit show` — display a built-in sheet's structure.

use crate::cli::args::ShowArgs;
use crate::cli::commands::resolve_sheet;
use crate::error::CheatkitError;

/// Compile a built-in sheet and print a human-readable outline of its
/// categories, entries, and command tokens.
///
/// # Errors
///
/// Returns a usage error if the sheet name is not found, or a build error
/// if the declaration fails to compile.
pub fn run(args: &ShowArgs) -> Result<(), CheatkitError> {
    let sheet = resolve_sheet(&args.name)?;
    let document = (sheet.build)()?;

    println!("{}", document.title());
    println!("  docset file:  {}", document.docset_file_name());
    println!("  keyword:      {}", document.keyword());
    if document.introduction().is_some() {
        println!("  introduction: yes");
    }
    println!();

    for category in document.categories() {
        println!("{}", category.id());
        for entry in category.entries() {
            println!("  {:<40}{}", entry.name(), entry.commands().join(", "));
        }
    }

    Ok(())
}
