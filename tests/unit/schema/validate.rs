use super::*;
use serde_json::json;

fn course(v: serde_json::Value) -> CourseDef {
    serde_json::from_value(v).unwrap()
}

fn paths(issues: &[ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.path.as_str()).collect()
}

#[test]
fn minimal_course_is_valid() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [{"type": "paragraph", "text": "x"}]}]
    })));
    assert!(r.valid);
    assert!(r.errors.is_empty());
    assert!(r.warnings.is_empty());
}

#[test]
fn empty_course_reports_title_and_sections() {
    let r = validate(&course(json!({})));
    assert!(!r.valid);
    assert_eq!(paths(&r.errors), vec!["$.title", "$.sections"]);
}

#[test]
fn section_without_title_or_content() {
    let r = validate(&course(json!({"title": "T", "sections": [{"title": "  "}]})));
    assert_eq!(
        paths(&r.errors),
        vec!["$.sections[0].title", "$.sections[0].content"]
    );
}

#[test]
fn quiz_errors_point_at_the_offending_field() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "quiz", "question": "Q", "options": ["only"]},
            {"type": "quickQuiz", "question": "Q", "options": ["a", "b"], "correctIndex": 2},
            {"type": "quiz", "question": "Q", "options": ["a", "b"], "correctIndex": -1}
        ]}]
    })));
    assert_eq!(
        paths(&r.errors),
        vec![
            "$.sections[0].content[0].options",
            "$.sections[0].content[1].correctIndex",
            "$.sections[0].content[2].correctIndex",
        ]
    );
}

#[test]
fn media_urls_must_be_present_and_http() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "image"},
            {"type": "video", "url": "ftp://x"},
            {"type": "pdf", "url": "https://example.com/a.pdf"}
        ]}]
    })));
    assert_eq!(r.errors.len(), 2);
    assert!(r.errors[0].message.contains("required"));
    assert!(r.errors[1].message.contains("ftp://x"));
}

#[test]
fn nested_children_are_checked() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "toggle", "text": "More", "children": [{"type": "image", "url": "nope"}]},
            {"type": "columns", "columns": [[{"type": "divider"}], [{"type": "quiz", "options": []}]]}
        ]}]
    })));
    assert_eq!(
        paths(&r.errors),
        vec![
            "$.sections[0].content[0].children[0].url",
            "$.sections[0].content[1].columns[1][0].options",
        ]
    );
}

#[test]
fn one_warning_per_paragraph_run() {
    let p = json!({"type": "paragraph", "text": "x"});
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            p.clone(), p.clone(), p.clone(), p.clone(),
            {"type": "divider"},
            p.clone(), p.clone(),
            {"type": "divider"},
            p.clone(), p.clone(), p
        ]}]
    })));
    assert!(r.valid);
    assert_eq!(
        paths(&r.warnings),
        vec!["$.sections[0].content[2]", "$.sections[0].content[10]"]
    );
}

#[test]
fn long_text_is_a_warning_not_an_error() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "quote", "text": "x".repeat(2001)},
            {"type": "bullet", "items": ["ok", "y".repeat(2500)]}
        ]}]
    })));
    assert!(r.valid);
    assert_eq!(
        paths(&r.warnings),
        vec!["$.sections[0].content[0].text", "$.sections[0].content[1].items[1]"]
    );
}

#[test]
fn display_lists_errors_with_paths() {
    let r = validate(&course(json!({"sections": []})));
    let shown = r.to_string();
    assert!(shown.contains("$.title: Course title is required"));
    assert!(shown.contains("$.sections: "));
}

#[test]
fn untyped_items_are_errors_and_unknown_types_warnings() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"text": "no type"},
            "not an object",
            {"type": "foobar"}
        ]}]
    })));
    assert!(!r.valid);
    assert_eq!(
        paths(&r.errors),
        vec!["$.sections[0].content[0].type", "$.sections[0].content[1].type"]
    );
    assert_eq!(paths(&r.warnings), vec!["$.sections[0].content[2].type"]);
}

#[test]
fn quiz_with_both_text_spellings_is_still_checked() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "quiz", "text": "x", "content": "y", "options": ["only"]}
        ]}]
    })));
    assert_eq!(paths(&r.errors), vec!["$.sections[0].content[0].options"]);
}

#[test]
fn long_text_is_found_in_every_text_field() {
    let long = "w".repeat(2001);
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "quiz", "question": long, "options": ["a", long]},
            {"type": "definition", "term": "t", "definition": long},
            {"type": "step", "title": "s", "description": long},
            {"type": "exercise", "title": "e", "instructions": [long]},
            {"type": "codeWithExplanation", "code": "x", "explanations": [long]},
            {"type": "callout", "text": "c", "children": [{"type": "quote", "text": long}]}
        ]}]
    })));
    assert!(r.valid);
    assert_eq!(
        paths(&r.warnings),
        vec![
            "$.sections[0].content[0].question",
            "$.sections[0].content[0].options[1]",
            "$.sections[0].content[1].definition",
            "$.sections[0].content[2].description",
            "$.sections[0].content[3].instructions[0]",
            "$.sections[0].content[4].explanations[0]",
            "$.sections[0].content[5].children[0].text",
        ]
    );
}

#[test]
fn child_columns_are_addressed_by_child_index() {
    let r = validate(&course(json!({
        "title": "T",
        "sections": [{"title": "S", "content": [
            {"type": "columns", "children": [{"type": "divider"}, {"type": "video", "url": "ftp://v"}]}
        ]}]
    })));
    assert_eq!(paths(&r.errors), vec!["$.sections[0].content[0].children[1].url"]);
}
