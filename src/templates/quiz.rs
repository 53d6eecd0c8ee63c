use crate::blocks::issue::BuildIssue;
use crate::blocks::model::Block;
use crate::blocks::text::{callout, callout_runs, paragraph, toggle};
use crate::foundation::core::Color;
use crate::templates::{author_runs, strip_leading_icons};
use crate::text::input::TextInput;
use crate::text::run::RichText;

/// Minimum options a quiz needs.
pub const MIN_OPTIONS: usize = 2;

/// Letter label for option `i`: `A`, `B`, ... then numbers past `Z`.
pub fn option_label(i: usize) -> String {
    match u8::try_from(i) {
        Ok(n) if n < 26 => char::from(b'A' + n).to_string(),
        _ => (i + 1).to_string(),
    }
}

/// Validate an answer index against `len` options.
pub fn answer_index(correct_index: i64, len: usize) -> Result<usize, BuildIssue> {
    match usize::try_from(correct_index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(BuildIssue::AnswerOutOfRange {
            index: correct_index,
            len,
        }),
    }
}

/// Quiz callout, or [`BuildIssue::TooFewOptions`] when fewer than two options are given.
///
/// An out-of-range `correct_index` is clamped to the first option. Inline markdown in the
/// question and options is recognized only when `markdown` is set.
pub fn try_quick_quiz(
    question: &str,
    options: &[String],
    correct_index: i64,
    markdown: bool,
) -> Result<Block, BuildIssue> {
    if options.len() < MIN_OPTIONS {
        return Err(BuildIssue::TooFewOptions {
            count: options.len(),
        });
    }
    let correct = answer_index(correct_index, options.len()).unwrap_or_else(|issue| {
        tracing::warn!(%issue, "quiz answer clamped");
        0
    });

    let labeled = |prefix: String, opt: &str| {
        let mut runs = vec![RichText::plain(&prefix)];
        runs.extend(author_runs(opt.trim(), markdown));
        TextInput::Runs(runs)
    };
    let mut nested: Vec<Block> = options
        .iter()
        .enumerate()
        .filter_map(|(i, opt)| paragraph(labeled(format!("{}) ", option_label(i)), opt)))
        .collect();
    let answer = labeled(
        format!("Correct answer: {}) ", option_label(correct)),
        &options[correct],
    );
    nested.push(toggle(
        "Show answer",
        vec![callout(answer, "✅", Color::GreenBackground)],
    ));

    let mut runs = author_runs(strip_leading_icons(question), markdown);
    for r in &mut runs {
        r.annotations.bold = true;
    }
    Ok(callout_runs(runs, "❓", Color::YellowBackground).with_children(nested))
}

/// Quiz callout; too few options degrade to a visible error paragraph.
pub fn quick_quiz(question: &str, options: &[String], correct_index: i64) -> Block {
    try_quick_quiz(question, options, correct_index, true).unwrap_or_else(|issue| {
        tracing::warn!(%issue, "quiz degraded to placeholder");
        issue.placeholder()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/templates/quiz.rs"]
mod tests;
