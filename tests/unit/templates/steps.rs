use super::*;

#[test]
fn step_icons() {
    assert_eq!(step_icon(1), "1️⃣");
    assert_eq!(step_icon(10), "🔟");
    assert_eq!(step_icon(11), STEP_BULLET);
    assert_eq!(step_icon(0), STEP_BULLET);
    assert_eq!(step_icon(-3), STEP_BULLET);
}

#[test]
fn step_prefix_is_not_doubled() {
    let b = step(1, "Step 1: Install Rust", None, vec![], true);
    assert_eq!(b.plain_text(), "Step 1: Install Rust");
    let b = step(2, "étape 2 - Build", None, vec![], true);
    assert_eq!(b.plain_text(), "Step 2: Build");
}

#[test]
fn step_nests_description_then_children() {
    let b = step(
        3,
        "Run",
        Some(TextInput::from("cargo run")),
        vec![None, paragraph("after")],
        true,
    );
    let kids = b.children();
    assert_eq!(kids.len(), 2);
    assert_eq!(kids[0].plain_text(), "cargo run");
    assert_eq!(kids[1].plain_text(), "after");
}

#[test]
fn exercise_label_is_stripped_and_solution_hidden() {
    let b = exercise(
        "Exercise: Add",
        &[TextInput::from("Write add"), TextInput::from("Test it")],
        Some("function add(a,b){ return a + b; }"),
        "javascript",
        true,
    );
    assert_eq!(b.plain_text(), "Exercise: Add");
    let kids = b.children();
    assert_eq!(kids.len(), 3);
    assert_eq!(kids[0].type_name(), "bulleted_list_item");
    let sol = &kids[2];
    assert_eq!(sol.type_name(), "toggle");
    assert_eq!(sol.children()[0].type_name(), "code");
    assert!(sol.children()[0].plain_text().contains("function add"));
}

#[test]
fn exercise_strips_icon_before_label() {
    let b = exercise("✍️ exercice : Loops", &[], None, "", true);
    assert_eq!(b.plain_text(), "Exercise: Loops");
    assert!(b.children().is_empty());
}

#[test]
fn titles_stay_literal_without_markdown() {
    let b = step(1, "Use `cargo`", None, vec![], false);
    assert_eq!(b.plain_text(), "Step 1: Use `cargo`");
    let b = step(1, "Use `cargo`", None, vec![], true);
    assert_eq!(b.plain_text(), "Step 1: Use cargo");
    let b = exercise("**Loops**", &[], None, "", false);
    assert_eq!(b.plain_text(), "Exercise: **Loops**");
}
