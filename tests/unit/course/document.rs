use super::*;

#[test]
fn non_object_top_level_is_a_parse_error() {
    for input in ["[]", "42", "\"course\"", "null"] {
        let err = input.parse::<Course>().unwrap_err();
        assert!(matches!(err, CourseError::Parse(_)), "{input}");
    }
}

#[test]
fn broken_json_is_a_parse_error() {
    let err = "{\"title\": ".parse::<Course>().unwrap_err();
    assert!(err.to_string().starts_with("parse error: parse course JSON"));
}

#[test]
fn loose_object_loads_and_fails_validation() {
    let c: Course = r#"{"title": 3, "sections": "none"}"#.parse().unwrap();
    assert_eq!(c.title(), None);
    assert!(!c.validate().valid);
    assert!(matches!(c.ensure_valid(), Err(CourseError::Validation(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Course::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, CourseError::Io(_)));
}

#[test]
fn compile_and_dry_run_agree() {
    let c: Course = r#"{"title": "T", "sections": [{"title": "S", "content": [{"type": "divider"}]}]}"#
        .parse()
        .unwrap();
    c.ensure_valid().unwrap();
    let opts = CompileOpts::default();
    assert_eq!(c.compile(&opts).len(), c.dry_run(&opts).total_blocks);
}
