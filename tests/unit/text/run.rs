use super::*;

#[test]
fn empty_and_whitespace_collapse_to_a_space() {
    assert_eq!(RichText::plain("").content(), " ");
    assert_eq!(RichText::plain("   \n\t").content(), " ");
}

#[test]
fn overlong_content_is_truncated_with_ellipsis() {
    let long = "x".repeat(2500);
    let run = RichText::plain(&long);
    assert_eq!(run.content().chars().count(), MAX_RUN_CHARS);
    assert!(run.content().ends_with("..."));
}

#[test]
fn exactly_max_length_is_kept() {
    let s = "y".repeat(MAX_RUN_CHARS);
    assert_eq!(RichText::plain(&s).content(), s);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long = "é".repeat(2100);
    let run = RichText::plain(&long);
    assert_eq!(run.content().chars().count(), MAX_RUN_CHARS);
}

#[test]
fn serializes_in_service_shape() {
    let run = text_run("hi", Annotations::bold(), Some("https://a.b".to_owned()));
    let v = serde_json::to_value(&run).unwrap();
    assert_eq!(v["type"], "text");
    assert_eq!(v["text"]["content"], "hi");
    assert_eq!(v["text"]["link"]["url"], "https://a.b");
    assert_eq!(v["annotations"]["bold"], true);
    assert_eq!(v["annotations"]["color"], "default");
}

#[test]
fn plain_text_joins_runs() {
    let runs = vec![RichText::bold("a"), RichText::plain(" b")];
    assert_eq!(plain_text(&runs), "a b");
}

#[test]
fn normalizing_keeps_whitespace_and_bounds_length() {
    let mut run = RichText::plain("x");
    run.text.content = "   ".to_owned();
    assert_eq!(run.normalized().content(), "   ");
    run.text.content.clear();
    assert_eq!(run.normalized().content(), " ");
    run.text.content = "q".repeat(2500);
    assert_eq!(run.normalized().content().chars().count(), MAX_RUN_CHARS);
}
