use crate::blocks::model::{Block, Callout, Heading, TextBlock, ToDo};
use crate::foundation::core::{Color, Icon};
use crate::text::format::format_input;
use crate::text::input::TextInput;
use crate::text::run::RichText;

fn runs(text: impl Into<TextInput>) -> Vec<RichText> {
    format_input(&text.into(), true)
}

/// Runs for structural blocks that must not disappear: empty input becomes one placeholder run.
fn runs_or_placeholder(text: impl Into<TextInput>) -> Vec<RichText> {
    let r = runs(text);
    if r.is_empty() {
        vec![RichText::plain("")]
    } else {
        r
    }
}

fn text_block(rich_text: Vec<RichText>) -> TextBlock {
    TextBlock {
        rich_text,
        ..TextBlock::default()
    }
}

/// Paragraph, or `None` when the text resolves to no runs at all.
pub fn paragraph(text: impl Into<TextInput>) -> Option<Block> {
    let r = runs(text);
    if r.is_empty() {
        return None;
    }
    Some(Block::Paragraph {
        paragraph: text_block(r),
    })
}

/// Heading of `level` 1..=3; other levels are clamped into range.
pub fn heading(level: u8, text: impl Into<TextInput>) -> Block {
    let h = Heading {
        rich_text: runs_or_placeholder(text),
        ..Heading::default()
    };
    match level {
        0 | 1 => Block::Heading1 { heading_1: h },
        2 => Block::Heading2 { heading_2: h },
        _ => Block::Heading3 { heading_3: h },
    }
}

/// Heading that collapses `children` under it.
pub fn toggle_heading(level: u8, text: impl Into<TextInput>, children: Vec<Block>) -> Block {
    let mut block = heading(level, text);
    match &mut block {
        Block::Heading1 { heading_1: h }
        | Block::Heading2 { heading_2: h }
        | Block::Heading3 { heading_3: h } => {
            h.is_toggleable = true;
            h.children = children;
        }
        _ => {}
    }
    block
}

/// Callout with an emoji icon and color.
pub fn callout(text: impl Into<TextInput>, icon: &str, color: Color) -> Block {
    callout_runs(runs_or_placeholder(text), icon, color)
}

/// Callout from runs that are already built (used by templates that mix styles).
pub fn callout_runs(rich_text: Vec<RichText>, icon: &str, color: Color) -> Block {
    let rich_text = if rich_text.is_empty() {
        vec![RichText::plain("")]
    } else {
        rich_text
    };
    Block::Callout {
        callout: Callout {
            rich_text,
            icon: Some(Icon::emoji(icon)),
            color,
            children: Vec::new(),
        },
    }
}

/// Quote.
pub fn quote(text: impl Into<TextInput>) -> Block {
    Block::Quote {
        quote: text_block(runs_or_placeholder(text)),
    }
}

/// Bulleted list item.
pub fn bulleted_item(text: impl Into<TextInput>) -> Block {
    Block::BulletedListItem {
        bulleted_list_item: text_block(runs_or_placeholder(text)),
    }
}

/// Numbered list item.
pub fn numbered_item(text: impl Into<TextInput>) -> Block {
    Block::NumberedListItem {
        numbered_list_item: text_block(runs_or_placeholder(text)),
    }
}

/// To-do item.
pub fn to_do(text: impl Into<TextInput>, checked: bool) -> Block {
    Block::ToDo {
        to_do: ToDo {
            rich_text: runs_or_placeholder(text),
            checked,
            ..ToDo::default()
        },
    }
}

/// Toggle; collapsed by default on the service side.
pub fn toggle(text: impl Into<TextInput>, children: Vec<Block>) -> Block {
    Block::Toggle {
        toggle: TextBlock {
            rich_text: runs_or_placeholder(text),
            color: Color::Default,
            children,
        },
    }
}

/// Keep the blocks that were actually built.
pub fn present(blocks: impl IntoIterator<Item = Option<Block>>) -> Vec<Block> {
    blocks.into_iter().flatten().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/blocks/text.rs"]
mod tests;
