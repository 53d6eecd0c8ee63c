use super::*;
use crate::text::input::Segment;

#[test]
fn paragraph_formats_markdown() {
    let b = paragraph("**a** and *b*").unwrap();
    let rt = b.rich_text().unwrap();
    assert_eq!(rt.len(), 3);
    assert!(rt[0].annotations.bold);
}

#[test]
fn paragraph_with_no_runs_is_none() {
    assert!(paragraph(Vec::<Segment>::new()).is_none());
    assert!(paragraph(Vec::<RichText>::new()).is_none());
}

#[test]
fn empty_string_paragraph_keeps_a_space_run() {
    let b = paragraph("").unwrap();
    assert_eq!(b.plain_text(), " ");
}

#[test]
fn structural_blocks_fall_back_to_placeholder_run() {
    let empty = Vec::<Segment>::new;
    for b in [
        heading(1, empty()),
        callout(empty(), "💡", Color::GrayBackground),
        quote(empty()),
        bulleted_item(empty()),
        numbered_item(empty()),
        to_do(empty(), false),
        toggle(empty(), vec![]),
    ] {
        let rt = b.rich_text().unwrap();
        assert_eq!(rt.len(), 1, "{}", b.type_name());
        assert_eq!(rt[0].content(), " ");
    }
}

#[test]
fn heading_levels_are_clamped() {
    assert_eq!(heading(0, "a").type_name(), "heading_1");
    assert_eq!(heading(2, "a").type_name(), "heading_2");
    assert_eq!(heading(9, "a").type_name(), "heading_3");
}

#[test]
fn toggle_heading_carries_children() {
    let b = toggle_heading(1, "Section", vec![bulleted_item("x")]);
    let Block::Heading1 { heading_1 } = &b else {
        panic!("expected heading_1");
    };
    assert!(heading_1.is_toggleable);
    assert_eq!(b.children().len(), 1);
}

#[test]
fn callout_carries_icon_and_color() {
    let v = serde_json::to_value(callout("hey", "🎉", Color::GreenBackground)).unwrap();
    assert_eq!(v["callout"]["icon"]["emoji"], "🎉");
    assert_eq!(v["callout"]["color"], "green_background");
}

#[test]
fn present_drops_missing_blocks() {
    let blocks = present([paragraph("a"), None, paragraph("b")]);
    assert_eq!(blocks.len(), 2);
}
