use super::*;
use crate::blocks::model::Block;

fn callout_parts(b: &Block) -> (String, Color, String) {
    let Block::Callout { callout } = b else {
        panic!("expected callout, got {}", b.type_name());
    };
    (
        callout.icon.as_ref().unwrap().as_str().to_owned(),
        callout.color,
        b.plain_text(),
    )
}

#[test]
fn each_kind_has_fixed_icon_and_color() {
    let (icon, color, _) = callout_parts(&note("x", NoteKind::Warning));
    assert_eq!(icon, "⚠️");
    assert_eq!(color, Color::YellowBackground);
    let (icon, color, _) = callout_parts(&note("x", NoteKind::Danger));
    assert_eq!(icon, "🚨");
    assert_eq!(color, Color::RedBackground);
}

#[test]
fn duplicate_icon_is_not_repeated() {
    let (_, _, text) = callout_parts(&note("💡 Use iterators", NoteKind::Tip));
    assert_eq!(text, "Use iterators");
}

#[test]
fn definition_bolds_the_term() {
    let b = definition("Ownership", "📖 Each value has one owner");
    let rt = b.rich_text().unwrap();
    assert!(rt[0].annotations.bold);
    assert_eq!(rt[0].content(), "Ownership");
    assert_eq!(b.plain_text(), "Ownership: Each value has one owner");
}

#[test]
fn note_kinds_parse_from_tags() {
    assert_eq!(NoteKind::from_name("tip"), Some(NoteKind::Tip));
    assert_eq!(NoteKind::from_name("tips"), None);
}
