use crate::blocks::code::code;
use crate::blocks::model::Block;
use crate::blocks::text::{bulleted_item, callout_runs, paragraph, present, toggle};
use crate::foundation::core::Color;
use crate::templates::{author_runs, dedupe_label};
use crate::text::input::TextInput;
use crate::text::run::RichText;
use once_cell::sync::Lazy;
use regex::Regex;

static STEP_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:step|étape)\s*\d+\s*[:.\-]\s*").expect("step label pattern compiles")
});
static EXERCISE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:exercise|exercice)\s*\d*\s*[:.\-]\s*")
        .expect("exercise label pattern compiles")
});

const STEP_DIGITS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];
const STEP_BULLET: &str = "🔹";

/// Icon for step `number`: keycap digits for 1 through 10, a bullet otherwise.
pub fn step_icon(number: i64) -> &'static str {
    match number {
        1..=10 => STEP_DIGITS[(number - 1) as usize],
        _ => STEP_BULLET,
    }
}

fn bold_title(prefix: &str, title: &str, markdown: bool) -> Vec<RichText> {
    let mut runs = vec![RichText::bold(prefix)];
    if !title.is_empty() {
        runs.extend(author_runs(title, markdown).into_iter().map(|mut r| {
            r.annotations.bold = true;
            r
        }));
    }
    runs
}

/// Numbered step callout.
///
/// A leading `Step N:` already present in `title` is dropped so it is not printed twice.
/// `description` becomes a paragraph child ahead of the remaining `children`.
pub fn step(
    number: i64,
    title: &str,
    description: Option<TextInput>,
    children: Vec<Option<Block>>,
    markdown: bool,
) -> Block {
    let title = dedupe_label(title, &STEP_LABEL);
    let prefix = if title.is_empty() {
        format!("Step {number}")
    } else {
        format!("Step {number}: ")
    };
    let mut nested = Vec::new();
    if let Some(d) = description {
        nested.extend(paragraph(d));
    }
    nested.extend(present(children));
    callout_runs(
        bold_title(&prefix, title, markdown),
        step_icon(number),
        Color::BlueBackground,
    )
    .with_children(nested)
}

/// Exercise callout: instructions as bullets, optional solution in a collapsed toggle.
pub fn exercise(
    title: &str,
    instructions: &[TextInput],
    solution: Option<&str>,
    language: &str,
    markdown: bool,
) -> Block {
    let title = dedupe_label(title, &EXERCISE_LABEL);
    let prefix = if title.is_empty() {
        "Exercise"
    } else {
        "Exercise: "
    };
    let mut nested: Vec<Block> = instructions.iter().map(bulleted_item).collect();
    if let Some(sol) = solution.filter(|s| !s.trim().is_empty()) {
        nested.push(toggle("Show solution", vec![code(sol, language)]));
    }
    callout_runs(
        bold_title(prefix, title, markdown),
        "✍️",
        Color::PurpleBackground,
    )
    .with_children(nested)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/steps.rs"]
mod tests;
