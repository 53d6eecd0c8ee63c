use crate::blocks::model::Block;
use crate::blocks::text::{callout, callout_runs};
use crate::foundation::core::Color;
use crate::templates::strip_input_icons;
use crate::text::format::format_input;
use crate::text::input::TextInput;
use crate::text::run::RichText;

/// Flavor of an annotated note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteKind {
    /// Neutral information.
    Info,
    /// Something to be careful about.
    Warning,
    /// A helpful hint.
    Tip,
    /// Something that breaks things.
    Danger,
}

impl NoteKind {
    /// Parse a note kind from its content type tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "info" | "note" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "tip" => Some(Self::Tip),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }

    /// Fixed icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Warning => "⚠️",
            Self::Tip => "💡",
            Self::Danger => "🚨",
        }
    }

    /// Fixed background color.
    pub fn color(self) -> Color {
        match self {
            Self::Info => Color::BlueBackground,
            Self::Warning => Color::YellowBackground,
            Self::Tip => Color::GreenBackground,
            Self::Danger => Color::RedBackground,
        }
    }
}

/// Callout with the kind's icon and color; a duplicate leading icon in `content` is removed.
pub fn note(content: impl Into<TextInput>, kind: NoteKind) -> Block {
    callout(strip_input_icons(content.into()), kind.icon(), kind.color())
}

/// Bold term, separator and definition text inside a 📖 callout.
pub fn definition(term: &str, def: impl Into<TextInput>) -> Block {
    let mut runs = Vec::new();
    let term = term.trim();
    if !term.is_empty() {
        runs.push(RichText::bold(term));
        runs.push(RichText::plain(": "));
    }
    runs.extend(format_input(&strip_input_icons(def.into()), true));
    callout_runs(runs, "📖", Color::GrayBackground)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/notes.rs"]
mod tests;
