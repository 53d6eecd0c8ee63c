//! Pedagogical patterns assembled from leaf builders.
//!
//! Templates own their icons and labels. Anything the author already typed that would repeat
//! them (a leading emoji, `Step 2:`, `Exercise:`) is stripped first.

/// Informational notes and definitions.
pub mod notes;
/// Summaries, objectives, prerequisites, timing, comparisons, annotated code.
pub mod outline;
/// Quick quizzes.
pub mod quiz;
/// Numbered steps and exercises.
pub mod steps;

use crate::text::format::format;
use crate::text::input::TextInput;
use crate::text::run::RichText;
use regex::Regex;

/// Icons templates put in front of their text; stripped from author text to avoid doubling.
pub const KNOWN_ICONS: &[&str] = &[
    "ℹ️", "ℹ", "⚠️", "⚠", "💡", "🚨", "❗", "❓", "✅", "✔️", "❌", "📖", "📝", "📌", "🎯",
    "📋", "⏱️", "⏱", "⚖️", "💻", "✍️", "🏋️", "🔥", "🎉", "🔹", "👉", "1️⃣", "2️⃣", "3️⃣", "4️⃣",
    "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Remove any run of [`KNOWN_ICONS`] (and surrounding whitespace) from the start of `text`.
pub fn strip_leading_icons(text: &str) -> &str {
    let mut rest = text.trim_start();
    loop {
        let Some(icon) = KNOWN_ICONS.iter().find(|i| rest.starts_with(**i)) else {
            return rest;
        };
        rest = rest[icon.len()..]
            .trim_start_matches(VARIATION_SELECTOR)
            .trim_start();
    }
}

/// Strip leading icons from text input; segment lists lose icons from their first segment.
pub(crate) fn strip_input_icons(input: TextInput) -> TextInput {
    match input {
        TextInput::Plain(s) => TextInput::Plain(strip_leading_icons(&s).to_owned()),
        TextInput::Segments(mut segs) => {
            if let Some(first) = segs.first_mut() {
                first.text = strip_leading_icons(&first.text).to_owned();
            }
            TextInput::Segments(segs)
        }
        runs @ TextInput::Runs(_) => runs,
    }
}

/// Author text as runs; inline markdown is recognized only when `markdown` is set.
pub(crate) fn author_runs(text: &str, markdown: bool) -> Vec<RichText> {
    if markdown {
        format(text)
    } else {
        vec![RichText::plain(text)]
    }
}

/// Strip leading icons, then a label the template is about to add itself.
pub(crate) fn dedupe_label<'a>(text: &'a str, label: &Regex) -> &'a str {
    let text = strip_leading_icons(text);
    match label.find(text) {
        Some(m) if m.start() == 0 => text[m.end()..].trim_start(),
        _ => text,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/mod.rs"]
mod tests;
