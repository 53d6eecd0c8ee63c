use super::*;

fn opts(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_owned()).collect()
}

fn revealed_answer(quiz: &Block) -> String {
    let reveal = quiz
        .children()
        .iter()
        .find(|b| b.type_name() == "toggle")
        .expect("answer toggle");
    reveal.children()[0].plain_text()
}

#[test]
fn single_option_quiz_is_an_error_paragraph() {
    let b = quick_quiz("Q", &opts(&["x"]), 0);
    assert_eq!(b.type_name(), "paragraph");
    assert!(b.plain_text().contains("at least 2 options"));
}

#[test]
fn out_of_range_index_clamps_to_first_option() {
    let b = quick_quiz("Q", &opts(&["a", "b", "c"]), 5);
    assert_eq!(b.type_name(), "callout");
    assert!(revealed_answer(&b).contains("A) a"));
}

#[test]
fn negative_index_clamps_too() {
    let b = quick_quiz("Q", &opts(&["a", "b"]), -1);
    assert!(revealed_answer(&b).contains("A) a"));
}

#[test]
fn options_are_lettered_in_order() {
    let b = quick_quiz("Which?", &opts(&["red", "green", "blue"]), 2);
    let labels: Vec<String> = b
        .children()
        .iter()
        .filter(|c| c.type_name() == "paragraph")
        .map(Block::plain_text)
        .collect();
    assert_eq!(labels, vec!["A) red", "B) green", "C) blue"]);
    assert_eq!(revealed_answer(&b), "Correct answer: C) blue");
}

#[test]
fn answer_is_revealed_in_green_callout() {
    let b = quick_quiz("Q", &opts(&["a", "b"]), 1);
    let toggle = b.children().last().unwrap();
    let Block::Callout { callout } = &toggle.children()[0] else {
        panic!("expected callout");
    };
    assert_eq!(callout.color, Color::GreenBackground);
}

#[test]
fn answer_index_rejects_out_of_bounds() {
    assert_eq!(answer_index(1, 2), Ok(1));
    assert!(answer_index(2, 2).is_err());
    assert!(answer_index(-1, 2).is_err());
}

#[test]
fn labels_past_z_fall_back_to_numbers() {
    assert_eq!(option_label(0), "A");
    assert_eq!(option_label(25), "Z");
    assert_eq!(option_label(26), "27");
}

#[test]
fn question_and_options_stay_literal_without_markdown() {
    let b = try_quick_quiz("What is **x**?", &opts(&["`a`", "b"]), 0, false).unwrap();
    assert_eq!(b.plain_text(), "What is **x**?");
    assert_eq!(b.children()[0].plain_text(), "A) `a`");
    assert_eq!(revealed_answer(&b), "Correct answer: A) `a`");

    let b = try_quick_quiz("What is **x**?", &opts(&["`a`", "b"]), 0, true).unwrap();
    assert_eq!(b.plain_text(), "What is x?");
    assert_eq!(b.children()[0].plain_text(), "A) a");
}
