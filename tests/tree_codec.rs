//! Tests for tree encoding, decoding and structural validation

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use twenty_questions::{
    Error, Node, NodeDoc, SchemaError, TreeCodec,
    adapters::JsonFileRepository,
    tree::{bootstrap, from_json, to_json},
};

/// A question chain `depth` levels deep along the no branch
fn chain(depth: usize) -> Node {
    (0..depth).fold(Node::new("Cat"), |no, level| {
        Node::question(
            format!("Question {level}?"),
            Node::new(format!("Animal {level}")),
            no,
        )
    })
}

fn assert_same_shape(a: &Node, b: &Node) {
    assert_eq!(a.value, b.value);
    assert_eq!(a.is_leaf(), b.is_leaf());
    match (&a.yes, &b.yes) {
        (Some(x), Some(y)) => assert_same_shape(x, y),
        (None, None) => {}
        _ => panic!("yes branch differs under '{}'", a.value),
    }
    match (&a.no, &b.no) {
        (Some(x), Some(y)) => assert_same_shape(x, y),
        (None, None) => {}
        _ => panic!("no branch differs under '{}'", a.value),
    }
}

#[test]
fn test_roundtrip_through_document() {
    let root = bootstrap::animals();
    let decoded = Node::decode(&root.encode()).expect("root document is not null");
    assert_same_shape(&root, &decoded);
    assert_eq!(root, decoded);
}

#[test]
fn test_roundtrip_through_json_text() {
    let root = Node::question(
        "Does it have fur?",
        Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat")),
        Node::with_children("Does it fly?", Some(Node::new("Bird")), None),
    );

    let text = to_json(&root).unwrap();
    let decoded = from_json(&text).unwrap();

    assert_same_shape(&root, &decoded);
    assert_eq!(decoded.animals(), vec!["Dog", "Cat", "Bird"]);
}

#[test]
fn test_stored_document_shape() {
    let root = Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat"));
    let value: serde_json::Value = serde_json::from_str(&to_json(&root).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "value": "Does it bark?",
            "yes": {"value": "Dog", "yes": null, "no": null},
            "no": {"value": "Cat", "yes": null, "no": null}
        })
    );
}

#[test]
fn test_legacy_bare_string_leaves_load() {
    let root = from_json(r#"{"value": "Does it bark?", "yes": "Dog", "no": "Cat"}"#).unwrap();
    assert_eq!(root.yes.as_deref(), Some(&Node::new("Dog")));
    assert_eq!(root.no.as_deref(), Some(&Node::new("Cat")));
}

#[test]
fn test_not_a_mapping_string_or_null() {
    for (doc, found) in [
        (json!([1, 2, 3]), "array"),
        (json!(42), "number"),
        (json!(true), "boolean"),
    ] {
        let err = NodeDoc::validate(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnexpectedType {
                path: "root".to_string(),
                found,
            }
        );
    }
}

#[test]
fn test_missing_value_key() {
    let err = NodeDoc::validate(&json!({"yes": null, "no": null})).unwrap_err();
    assert_eq!(err.path(), "root");
    assert_eq!(err.to_string(), "missing 'value' key at root");
}

#[test]
fn test_non_string_value() {
    let err = NodeDoc::validate(&json!({"value": ["Dog"]})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'value' must be a string at root, got array"
    );
}

#[test]
fn test_malformed_nested_child_names_branch() {
    let doc = json!({
        "value": "Does it have fur?",
        "yes": {
            "value": "Does it bark?",
            "yes": "Dog",
            "no": {"value": 3}
        },
        "no": "Bird"
    });

    let err = NodeDoc::validate(&doc).unwrap_err();
    assert_eq!(err.path(), "root.yes.no");
    assert!(err.to_string().contains("root.yes.no"));

    match from_json(&doc.to_string()) {
        Err(Error::Schema(schema)) => assert_eq!(schema, err),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_roundtrip_deep_chain() {
    let root = chain(500);
    assert_eq!(root.depth(), 500);

    let decoded = from_json(&to_json(&root).unwrap()).unwrap();
    assert_eq!(decoded.depth(), 500);
    assert_eq!(decoded, root);
}

#[test]
fn test_deep_chain_reloads_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let codec = TreeCodec::new(
        Arc::new(JsonFileRepository::new()),
        temp_dir.path().join("deep.json"),
    );
    let root = chain(300);
    codec.save(&root).unwrap();

    let reloaded = codec.load(Some(Node::new("DEFAULT")), false).unwrap();
    assert_eq!(reloaded.value, "Question 299?");
    assert_eq!(reloaded.animal_count(), 301);
    assert_eq!(reloaded, root);
}
