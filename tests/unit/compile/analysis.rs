use super::*;
use serde_json::json;

fn course(v: serde_json::Value) -> CourseDef {
    serde_json::from_value(v).unwrap()
}

#[test]
fn invalid_course_is_still_compiled_and_counted() {
    let def = course(json!({
        "sections": [{"title": "S", "content": [
            {"type": "image", "url": "ftp://x"},
            {"type": "toggle", "text": "t", "children": [{"type": "paragraph", "text": "p"}]}
        ]}]
    }));
    let a = dry_run(&def, &CompileOpts::default());
    assert!(!a.valid);
    assert_eq!(a.validation.errors.len(), 2);
    assert_eq!(a.diagnostics.len(), 1);
    assert_eq!(a.stats.total_items, 2);
    // 4 header + divider, heading, placeholder, toggle + 2 footer
    assert_eq!(a.total_blocks, 10);
    assert_eq!(a.tree_blocks, 11);
    assert_eq!(a.blocks_by_type["paragraph"], 2);
    assert_eq!(a.blocks_by_type["divider"], 4);
    assert_eq!(a.batches, 1);
}

#[test]
fn batches_grow_past_one_hundred_blocks() {
    let items: Vec<_> = (0..150).map(|_| json!({"type": "divider"})).collect();
    let def = course(json!({"title": "T", "sections": [{"title": "S", "content": items}]}));
    let a = dry_run(
        &def,
        &CompileOpts {
            scaffolding: false,
            ..CompileOpts::default()
        },
    );
    assert_eq!(a.total_blocks, 152);
    assert_eq!(a.batches, 2);
    assert!(a.valid);
    assert!(a.recommendations.iter().any(|r| r.contains("average")));
}

#[test]
fn serializes_with_camel_case_keys() {
    let a = dry_run(&course(json!({})), &CompileOpts::default());
    let v = serde_json::to_value(&a).unwrap();
    assert!(v.get("totalBlocks").is_some());
    assert!(v.get("blocksByType").is_some());
    assert!(v["validation"]["errors"].is_array());
}
