use super::*;
use serde_json::json;

fn item(v: serde_json::Value) -> ContentItem {
    let def: ContentItemDef = serde_json::from_value(v).unwrap();
    ContentItem::from_def(&def)
}

#[test]
fn synonyms_resolve_to_the_same_variant() {
    for tag in ["bullet", "bullets", "bulletedListItem", "bulletedList"] {
        assert_eq!(item(json!({"type": tag, "text": "x"})).tag(), "bulletedList");
    }
    for tag in ["quiz", "quickQuiz"] {
        assert_eq!(item(json!({"type": tag})).tag(), "quiz");
    }
    for tag in ["exercice", "exercise"] {
        assert_eq!(item(json!({"type": tag})).tag(), "exercise");
    }
    assert_eq!(item(json!({"type": "linkPreview"})).tag(), "bookmark");
}

#[test]
fn unknown_tags_keep_their_name() {
    assert_eq!(
        item(json!({"type": "foobar", "text": "hi"})),
        ContentItem::Unknown {
            name: "foobar".to_owned()
        }
    );
    assert_eq!(
        item(json!({})),
        ContentItem::Unknown {
            name: String::new()
        }
    );
}

#[test]
fn list_items_fall_back_to_text() {
    let ContentItem::BulletedList { items } = item(json!({"type": "bullet", "text": "solo"}))
    else {
        panic!("expected list");
    };
    assert_eq!(items, vec![TextInput::from("solo")]);

    let ContentItem::NumberedList { items } =
        item(json!({"type": "numbered", "text": "ignored", "items": ["a", "b"]}))
    else {
        panic!("expected list");
    };
    assert_eq!(items.len(), 2);
}

#[test]
fn quiz_fields_default_when_missing() {
    let ContentItem::Quiz {
        question,
        options,
        correct_index,
    } = item(json!({"type": "quiz", "text": "Why?"}))
    else {
        panic!("expected quiz");
    };
    assert_eq!(question, "Why?");
    assert!(options.is_empty());
    assert_eq!(correct_index, 0);
}

#[test]
fn toggle_children_are_resolved_recursively() {
    let t = item(json!({
        "type": "toggle",
        "title": "More",
        "children": [{"type": "tip", "text": "x"}, {"type": "nope"}]
    }));
    let nested = t.nested();
    assert_eq!(nested.len(), 2);
    assert_eq!(nested[0].tag(), "tip");
    assert_eq!(nested[1].tag(), "unknown");
}

#[test]
fn columns_fall_back_to_one_column_per_child() {
    let c = item(json!({
        "type": "columns",
        "children": [{"type": "paragraph", "text": "a"}, {"type": "paragraph", "text": "b"}]
    }));
    let ContentItem::Columns {
        columns,
        from_children,
    } = c
    else {
        panic!("expected columns");
    };
    assert_eq!(columns.len(), 2);
    assert!(from_children);
}

#[test]
fn media_kinds_resolve() {
    let ContentItem::Media { kind, url, .. } =
        item(json!({"type": "pdf", "url": "https://x.io/a.pdf"}))
    else {
        panic!("expected media");
    };
    assert_eq!(kind, MediaKind::Pdf);
    assert_eq!(url, "https://x.io/a.pdf");
}
