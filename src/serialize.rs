//! Document serialization.
//!
//! Pure functions from a finished [`Document`] to text. Output is
//! deterministic: struct fields serialize in declaration order and every
//! sequence preserves its declaration order, so the same document always
//! produces byte-identical output. Writing the result anywhere is the
//! caller's concern.

use crate::document::Document;

/// Serializes a document to pretty-printed JSON.
///
/// Optional fields (`introduction`, `notes`) are omitted entirely when
/// unset, never emitted as empty strings.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

/// Serializes a document to YAML.
///
/// # Errors
///
/// Returns `serde_yaml::Error` if serialization fails.
pub fn to_yaml(document: &Document) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;

    fn minimal() -> Document {
        let mut b = DocumentBuilder::new();
        b.begin_document().unwrap();
        b.set_title("X").unwrap();
        b.set_docset_file_name("X").unwrap();
        b.set_keyword("x").unwrap();
        b.begin_category("Cat").unwrap();
        b.begin_entry().unwrap();
        b.set_name("E").unwrap();
        b.add_command("cmd").unwrap();
        b.end_entry().unwrap();
        b.end_category().unwrap();
        b.end_document().unwrap()
    }

    #[test]
    fn json_has_expected_shape() {
        let json = to_json(&minimal()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "X");
        assert_eq!(value["docsetFileName"], "X");
        assert_eq!(value["keyword"], "x");
        assert_eq!(value["categories"][0]["id"], "Cat");
        assert_eq!(value["categories"][0]["entries"][0]["name"], "E");
        assert_eq!(value["categories"][0]["entries"][0]["commands"][0], "cmd");
    }

    #[test]
    fn unset_optional_fields_are_absent() {
        let json = to_json(&minimal()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("introduction").is_none());
        assert!(
            value["categories"][0]["entries"][0].get("notes").is_none(),
            "notes key must be absent, not null or empty"
        );
    }

    #[test]
    fn serialization_is_deterministic() {
        let doc = minimal();
        assert_eq!(to_json(&doc).unwrap(), to_json(&doc).unwrap());
        assert_eq!(to_yaml(&doc).unwrap(), to_yaml(&doc).unwrap());
    }

    #[test]
    fn yaml_round_trips_as_mapping() {
        let yaml = to_yaml(&minimal()).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["keyword"], "x");
        assert_eq!(value["categories"][0]["id"], "Cat");
    }
}
