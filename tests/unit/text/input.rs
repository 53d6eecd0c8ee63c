use super::*;
use serde_json::json;

#[test]
fn strings_and_numbers_read_as_plain() {
    assert_eq!(
        TextInput::from_value(&json!("hi")),
        Some(TextInput::Plain("hi".to_owned()))
    );
    assert_eq!(
        TextInput::from_value(&json!(42)),
        Some(TextInput::Plain("42".to_owned()))
    );
    assert_eq!(TextInput::from_value(&json!(null)), None);
}

#[test]
fn segment_lists_keep_their_flags() {
    let v = json!([{"text": "a", "bold": true}, "b", {"nope": 1}]);
    let Some(TextInput::Segments(segs)) = TextInput::from_value(&v) else {
        panic!("expected segments");
    };
    assert_eq!(segs.len(), 2);
    assert!(segs[0].bold);
    assert_eq!(segs[1].text, "b");
}

#[test]
fn service_runs_pass_through() {
    let v = json!([{
        "type": "text",
        "text": {"content": "x", "link": null},
        "annotations": {"italic": true}
    }]);
    let Some(TextInput::Runs(runs)) = TextInput::from_value(&v) else {
        panic!("expected runs");
    };
    assert_eq!(runs[0].content(), "x");
    assert!(runs[0].annotations.italic);
}

#[test]
fn segment_to_run_drops_non_web_links_and_unknown_colors() {
    let seg = Segment {
        text: "t".to_owned(),
        color: Some("ultraviolet".to_owned()),
        link: Some("mailto:a@b".to_owned()),
        ..Segment::default()
    };
    let run = seg.to_run();
    assert_eq!(run.link(), None);
    assert_eq!(run.annotations.color, Color::Default);
}

#[test]
fn char_len_counts_visible_text() {
    let t = TextInput::Segments(vec![Segment::new("ab"), Segment::new("cé")]);
    assert_eq!(t.char_len(), 4);
    assert_eq!(t.raw_text(), "abcé");
}
