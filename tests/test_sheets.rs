//! Built-in sheet registry and full RSpec Expectations content.

use cheatkit::{serialize, sheets};

/// Every registered sheet compiles and yields a structurally valid
/// document with serializable output.
#[test]
fn all_sheets_compile_and_serialize() {
    for sheet in sheets::list_sheets() {
        let doc = (sheet.build)().unwrap_or_else(|e| {
            panic!("sheet '{}' failed to build: {e}", sheet.name);
        });
        assert!(!doc.categories().is_empty());
        let json = serialize::to_json(&doc)
            .unwrap_or_else(|e| panic!("sheet '{}' failed to serialize: {e}", sheet.name));
        assert!(json.contains(doc.title()));
    }
}

/// The RSpec sheet carries the complete matcher reference.
#[test]
fn rspec_sheet_content() {
    let sheet = sheets::find_sheet("rspec-expectations").expect("sheet registered");
    let doc = (sheet.build)().unwrap();

    assert_eq!(doc.title(), "RSpec Expectations 3.2");
    assert_eq!(doc.keyword(), "rspec");
    assert!(
        doc.introduction()
            .is_some_and(|intro| intro.contains("expect(..).to")),
        "introduction should explain the expect syntax"
    );

    let matchers = &doc.categories()[0];
    assert_eq!(matchers.id(), "Built-in Matchers");

    let names: Vec<&str> = matchers.entries().iter().map(|e| e.name()).collect();
    assert!(names.contains(&"Object identity"));
    assert!(names.contains(&"Expecting errors"));
    assert!(names.contains(&"Collection membership"));
    assert!(names.contains(&"Block expectation"));

    let comparisons = matchers
        .entries()
        .iter()
        .find(|e| e.name() == "Comparisons")
        .expect("Comparisons entry present");
    assert_eq!(comparisons.commands().len(), 9);
    assert!(comparisons.commands().iter().any(|c| c == "be_between"));
}

/// The serialized sheet matches the documented output contract: camelCase
/// metadata keys and notes embedding fenced code blocks as opaque text.
#[test]
fn rspec_sheet_serialized_shape() {
    let sheet = sheets::find_sheet("rspec-expectations").expect("sheet registered");
    let doc = (sheet.build)().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&serialize::to_json(&doc).unwrap()).unwrap();

    assert_eq!(value["docsetFileName"], "RSpec Expectations 3.2");
    assert_eq!(value["keyword"], "rspec");

    let entries = value["categories"][0]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 15);
    for entry in entries {
        let notes = entry["notes"].as_str().unwrap();
        assert!(notes.contains("```ruby"), "notes keep fenced code blocks");
        assert!(!entry["commands"].as_array().unwrap().is_empty());
    }
}

/// Unknown names are not resolved; close misspellings get a suggestion.
#[test]
fn registry_lookup_and_suggestions() {
    assert!(sheets::find_sheet("rspec-expectation").is_none());
    assert_eq!(
        sheets::suggest_sheet("rspec-expectation"),
        Some("rspec-expectations".to_string())
    );
    assert!(sheets::suggest_sheet("completely-different").is_none());
}
