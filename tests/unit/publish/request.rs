use super::*;
use crate::blocks::layout::divider;
use serde_json::json;

fn course(v: serde_json::Value) -> CourseDef {
    serde_json::from_value(v).unwrap()
}

#[test]
fn serializes_in_the_service_shape() {
    let def = course(json!({
        "parentId": "abc",
        "title": "Rust 101",
        "icon": "🦀",
        "cover": "https://example.com/c.png"
    }));
    let req = CreatePageRequest::from_course(&def, vec![divider()]).unwrap();
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v["parent"]["page_id"], "abc");
    assert_eq!(v["icon"], json!({"type": "emoji", "emoji": "🦀"}));
    assert_eq!(
        v["cover"],
        json!({"type": "external", "external": {"url": "https://example.com/c.png"}})
    );
    assert_eq!(
        v["properties"]["title"]["title"][0]["text"]["content"],
        "Rust 101"
    );
    assert_eq!(v["children"][0]["type"], "divider");
}

#[test]
fn optional_parts_are_omitted() {
    let def = course(json!({"parentId": "abc", "cover": "ftp://nope"}));
    let v = serde_json::to_value(CreatePageRequest::from_course(&def, Vec::new()).unwrap()).unwrap();
    assert!(v.get("icon").is_none());
    assert!(v.get("cover").is_none());
    assert_eq!(v["properties"]["title"]["title"], json!([]));
}

#[test]
fn parent_is_required() {
    let def = course(json!({"parentId": "  ", "title": "T"}));
    let err = CreatePageRequest::from_course(&def, Vec::new()).unwrap_err();
    assert!(matches!(err, CourseError::Validation(_)));
}
