//! Builder state machine and error taxonomy, exercised through the
//! public library API.

use cheatkit::{
    BuildError, ConfigurationError, DocumentBuilder, Scope, ValidationError,
};

/// Declaring an entry before any category is open is a state error.
#[test]
fn entry_before_category_fails() {
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    let err = b.begin_entry().unwrap_err();
    let BuildError::State(state) = err else {
        panic!("expected a state error");
    };
    assert_eq!(state.expected, Scope::CategoryOpen);
    assert_eq!(state.actual, Scope::DocumentOpen);
}

/// Scalar setters before `begin_document` are state errors.
#[test]
fn set_title_while_idle_fails() {
    let mut b = DocumentBuilder::new();
    let err = b.set_title("X").unwrap_err();
    assert!(matches!(err, BuildError::State(_)), "got {err:?}");
}

/// A second category with the same id fails at the `begin_category` call,
/// before any further declarations are accepted.
#[test]
fn duplicate_category_fails_immediately() {
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    b.begin_category("Dup").unwrap();
    b.begin_entry().unwrap();
    b.set_name("E").unwrap();
    b.add_command("cmd").unwrap();
    b.end_entry().unwrap();
    b.end_category().unwrap();

    let err = b.begin_category("Dup").unwrap_err();
    assert!(
        matches!(
            err,
            BuildError::Configuration(ConfigurationError::DuplicateCategory { .. })
        ),
        "got {err:?}"
    );
    // the builder never entered the category scope
    assert_eq!(b.scope(), Scope::DocumentOpen);
}

/// Closing an entry that declared no commands is a validation error.
#[test]
fn end_entry_without_commands_fails() {
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    b.begin_category("C").unwrap();
    b.begin_entry().unwrap();
    b.set_name("Comparisons").unwrap();
    let err = b.end_entry().unwrap_err();
    let BuildError::Validation(ValidationError::EntryWithoutCommands { name }) = err else {
        panic!("expected EntryWithoutCommands");
    };
    assert_eq!(name, "Comparisons");
}

/// Setting a scalar field twice on the same document is a configuration
/// error; the first value is retained.
#[test]
fn second_set_title_fails_and_first_value_wins() {
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    b.set_title("A").unwrap();
    let err = b.set_title("B").unwrap_err();
    assert!(
        matches!(
            err,
            BuildError::Configuration(ConfigurationError::AlreadySet { field: "title" })
        ),
        "got {err:?}"
    );

    b.set_docset_file_name("A").unwrap();
    b.set_keyword("a").unwrap();
    b.begin_category("C").unwrap();
    b.end_category().unwrap();
    let doc = b.end_document().unwrap();
    assert_eq!(doc.title(), "A");
}

/// Every required scalar is checked at `end_document`.
#[test]
fn end_document_reports_each_missing_field() {
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    b.begin_category("C").unwrap();
    b.end_category().unwrap();
    let err = b.end_document().unwrap_err();
    assert!(
        matches!(
            err,
            BuildError::Validation(ValidationError::MissingField { field: "title" })
        ),
        "got {err:?}"
    );

    // a fresh builder with the title set reports the next missing field
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    b.set_title("T").unwrap();
    b.begin_category("C").unwrap();
    b.end_category().unwrap();
    let err = b.end_document().unwrap_err();
    assert!(
        matches!(
            err,
            BuildError::Validation(ValidationError::MissingField {
                field: "docsetFileName"
            })
        ),
        "got {err:?}"
    );
}

/// `end_category` outside a category and `end_document` outside a
/// document are state errors, not panics.
#[test]
fn mismatched_end_calls_fail() {
    let mut b = DocumentBuilder::new();
    assert!(matches!(
        b.end_document().unwrap_err(),
        BuildError::State(_)
    ));

    b.begin_document().unwrap();
    assert!(matches!(
        b.end_category().unwrap_err(),
        BuildError::State(_)
    ));

    b.begin_category("C").unwrap();
    assert!(matches!(b.end_entry().unwrap_err(), BuildError::State(_)));
}

/// A closed builder cannot be reused for another document.
#[test]
fn builder_is_single_use() {
    let mut b = DocumentBuilder::new();
    b.begin_document().unwrap();
    b.set_title("T").unwrap();
    b.set_docset_file_name("T").unwrap();
    b.set_keyword("t").unwrap();
    b.begin_category("C").unwrap();
    b.end_category().unwrap();
    b.end_document().unwrap();

    let err = b.begin_document().unwrap_err();
    let BuildError::State(state) = err else {
        panic!("expected a state error");
    };
    assert_eq!(state.actual, Scope::Closed);
}

/// Error messages identify the offending call and scope.
#[test]
fn state_error_message_names_call_and_scopes() {
    let mut b = DocumentBuilder::new();
    let err = b.begin_category("C").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("begin_category"), "message: {msg}");
    assert!(msg.contains("idle"), "message: {msg}");
    assert!(msg.contains("inside a document"), "message: {msg}");
}
