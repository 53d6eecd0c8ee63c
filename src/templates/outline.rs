use crate::blocks::code::code;
use crate::blocks::layout::columns;
use crate::blocks::model::Block;
use crate::blocks::text::{bulleted_item, callout, callout_runs, heading, numbered_item, to_do};
use crate::foundation::core::Color;
use crate::foundation::lenient;
use crate::templates::dedupe_label;
use crate::text::input::TextInput;
use crate::text::run::RichText;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static SUMMARY_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:chapter\s+)?(?:summary|résumé)\b\s*[:.\-]?\s*")
        .expect("summary label pattern compiles")
});

fn titled(label: &str, icon: &str, color: Color, children: Vec<Block>) -> Block {
    callout_runs(vec![RichText::bold(label)], icon, color).with_children(children)
}

/// Chapter summary: a 📝 callout over a bulleted list of key points.
///
/// A custom `title` that merely repeats the `Summary` label is reduced to the default label.
pub fn chapter_summary(title: Option<&str>, points: &[TextInput]) -> Block {
    let label = match title.map(|t| dedupe_label(t, &SUMMARY_LABEL)) {
        Some(rest) if !rest.is_empty() => format!("Summary: {rest}"),
        _ => "Summary".to_owned(),
    };
    titled(
        &label,
        "📝",
        Color::GrayBackground,
        points.iter().map(bulleted_item).collect(),
    )
}

/// Learning objectives as unchecked to-dos under a 🎯 callout.
pub fn learning_objectives(objectives: &[TextInput]) -> Block {
    titled(
        "Learning objectives",
        "🎯",
        Color::BlueBackground,
        objectives.iter().map(|o| to_do(o, false)).collect(),
    )
}

/// Prerequisites as a bulleted list under a 📋 callout.
pub fn prerequisites(items: &[TextInput]) -> Block {
    titled(
        "Prerequisites",
        "📋",
        Color::OrangeBackground,
        items.iter().map(bulleted_item).collect(),
    )
}

/// Human-readable duration: `45 minutes`, `1 minute`, `2 h`, `1 h 30 min`.
pub fn format_minutes(minutes: i64) -> String {
    let m = minutes.max(0);
    match (m / 60, m % 60) {
        (0, 1) => "1 minute".to_owned(),
        (0, r) => format!("{r} minutes"),
        (h, 0) => format!("{h} h"),
        (h, r) => format!("{h} h {r} min"),
    }
}

/// Static ⏱️ callout with the estimated duration.
pub fn estimated_time(minutes: i64) -> Block {
    callout(
        format!("**Estimated time:** {}", format_minutes(minutes)),
        "⏱️",
        Color::GrayBackground,
    )
}

/// One side of a comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ComparisonSide {
    /// Column heading.
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    /// Column points.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub items: Vec<TextInput>,
}

impl ComparisonSide {
    /// Build a side from a title and points.
    pub fn new(title: impl Into<String>, items: Vec<TextInput>) -> Self {
        Self {
            title: Some(title.into()),
            items,
        }
    }

    fn into_column(self) -> Vec<Block> {
        let mut col = Vec::with_capacity(self.items.len() + 1);
        if let Some(t) = self.title.filter(|t| !t.trim().is_empty()) {
            col.push(heading(3, t));
        }
        col.extend(self.items.iter().map(bulleted_item));
        col
    }
}

/// ⚖️ callout wrapping a two-column layout of titled lists.
pub fn comparison(left: ComparisonSide, right: ComparisonSide) -> Block {
    let layout = columns(vec![left.into_column(), right.into_column()]);
    titled(
        "Comparison",
        "⚖️",
        Color::Default,
        layout.into_iter().collect(),
    )
}

/// 💻 callout pairing a code block with a numbered list of line explanations.
pub fn code_with_explanation(source: &str, language: &str, explanations: &[TextInput]) -> Block {
    let mut nested = vec![code(source, language)];
    nested.extend(explanations.iter().map(numbered_item));
    titled("Code explained", "💻", Color::GrayBackground, nested)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/outline.rs"]
mod tests;
