use super::*;
use crate::text::input::Segment;
use crate::text::run::MAX_RUN_CHARS;

fn contents(runs: &[RichText]) -> Vec<&str> {
    runs.iter().map(|r| r.content()).collect()
}

#[test]
fn bold_and_italic_split_into_three_runs() {
    let runs = format("**a** and *b*");
    assert_eq!(contents(&runs), vec!["a", " and ", "b"]);
    assert!(runs[0].annotations.bold);
    assert!(!runs[1].annotations.bold && !runs[1].annotations.italic);
    assert!(runs[2].annotations.italic);
}

#[test]
fn text_without_markers_is_one_plain_run() {
    let runs = format("just words");
    assert_eq!(contents(&runs), vec!["just words"]);
    assert_eq!(runs[0].annotations, Annotations::default());
}

#[test]
fn empty_input_yields_a_single_space_run() {
    assert_eq!(contents(&format("")), vec![" "]);
    assert_eq!(contents(&format("  ")), vec![" "]);
}

#[test]
fn code_strike_and_link_are_recognized() {
    let runs = format("use `x`, ~~old~~ see [docs](https://d.io)");
    assert_eq!(
        contents(&runs),
        vec!["use ", "x", ", ", "old", " see ", "docs"]
    );
    assert!(runs[1].annotations.code);
    assert!(runs[3].annotations.strikethrough);
    assert_eq!(runs[5].link(), Some("https://d.io"));
}

#[test]
fn link_with_non_web_target_keeps_label_only() {
    let runs = format("[here](ftp://x)");
    assert_eq!(contents(&runs), vec!["here"]);
    assert_eq!(runs[0].link(), None);
}

#[test]
fn overlapping_tokens_keep_the_earliest_claim() {
    // The strikethrough starts first, so the strong token inside it is dropped.
    let runs = format("~~a **b~~ c**");
    assert_eq!(contents(&runs), vec!["a **b", " c**"]);
    assert!(runs[0].annotations.strikethrough);
}

#[test]
fn token_inside_an_earlier_token_is_dropped() {
    let runs = format("`[a](https://x.io)`");
    assert_eq!(runs.len(), 1);
    assert!(runs[0].annotations.code);
}

#[test]
fn nested_markers_are_not_interpreted() {
    let runs = format("**_x_**");
    assert_eq!(contents(&runs), vec!["_x_"]);
    assert!(runs[0].annotations.bold);
    assert!(!runs[0].annotations.italic);
}

#[test]
fn markdown_can_be_disabled_for_plain_input() {
    let runs = format_input(&TextInput::from("**a**"), false);
    assert_eq!(contents(&runs), vec!["**a**"]);
}

#[test]
fn segments_bypass_pattern_search() {
    let input = TextInput::Segments(vec![Segment::new("**raw**").bold()]);
    let runs = format_input(&input, true);
    assert_eq!(contents(&runs), vec!["**raw**"]);
    assert!(runs[0].annotations.bold);
}

#[test]
fn empty_segment_list_yields_no_runs() {
    assert!(format_input(&TextInput::Segments(vec![]), true).is_empty());
}

#[test]
fn prebuilt_runs_go_through_the_run_constructor() {
    let mut empty = text_run("x", Annotations::bold(), None);
    empty.text.content.clear();
    let mut long = RichText::plain("x");
    long.text.content = "y".repeat(2500);

    let runs = format_input(&TextInput::Runs(vec![empty, long]), true);
    assert_eq!(runs[0].content(), " ");
    assert!(runs[0].annotations.bold);
    assert_eq!(runs[1].content().chars().count(), MAX_RUN_CHARS);
    assert!(runs[1].content().ends_with("..."));
}

#[test]
fn prebuilt_runs_from_json_are_bounded() {
    let v = serde_json::json!([
        {"type": "text", "text": {"content": ""}},
        {"type": "text", "text": {"content": "z".repeat(2500), "link": {"url": "javascript:x"}}}
    ]);
    let input = TextInput::from_value(&v).unwrap();
    let runs = format_input(&input, true);
    assert_eq!(contents(&runs)[0], " ");
    assert_eq!(runs[1].content().chars().count(), MAX_RUN_CHARS);
    assert_eq!(runs[1].link(), None);
}

#[test]
fn whitespace_between_tokens_is_kept() {
    let runs = format("**a**   *b*");
    assert_eq!(contents(&runs), vec!["a", "   ", "b"]);
    let runs = format("x\n\n**y**");
    assert_eq!(contents(&runs), vec!["x\n\n", "y"]);
}
