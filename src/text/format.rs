//! Inline formatter for the markdown subset course authors use in text fields.
//!
//! Five patterns are searched independently over the whole string. Candidate tokens are sorted by
//! start offset (ties keep pattern order) and a token overlapping an already accepted one is
//! dropped. Nested markers are not interpreted.

use crate::foundation::core::is_http_url;
use crate::text::input::TextInput;
use crate::text::run::{Annotations, RichText, piece_run, text_run};
use once_cell::sync::Lazy;
use regex::Regex;

static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("strong pattern compiles"));
// `**` is matched first so a strong marker never opens an emphasis token.
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*|\*([^*\n]+)\*").expect("emphasis pattern compiles"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("code pattern compiles"));
static STRIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~~(.+?)~~").expect("strikethrough pattern compiles"));
static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").expect("link pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Style {
    Strong,
    Emphasis,
    Code,
    Strike,
    Link(String),
}

#[derive(Debug, Clone)]
struct Token {
    start: usize,
    end: usize,
    inner: String,
    style: Style,
}

fn scan(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for c in STRONG.captures_iter(text) {
        push_token(&mut tokens, &c, Style::Strong);
    }
    for c in EMPHASIS.captures_iter(text) {
        if c.get(1).is_some() {
            push_token(&mut tokens, &c, Style::Emphasis);
        }
    }
    for c in CODE.captures_iter(text) {
        push_token(&mut tokens, &c, Style::Code);
    }
    for c in STRIKE.captures_iter(text) {
        push_token(&mut tokens, &c, Style::Strike);
    }
    for c in LINK.captures_iter(text) {
        let url = c.get(2).map_or("", |m| m.as_str()).to_owned();
        push_token(&mut tokens, &c, Style::Link(url));
    }
    tokens
}

fn push_token(tokens: &mut Vec<Token>, c: &regex::Captures<'_>, style: Style) {
    let (Some(whole), Some(inner)) = (c.get(0), c.get(1)) else {
        return;
    };
    tokens.push(Token {
        start: whole.start(),
        end: whole.end(),
        inner: inner.as_str().to_owned(),
        style,
    });
}

/// Keep the first claim by sorted position; later overlapping tokens are dropped.
fn resolve_overlaps(mut tokens: Vec<Token>) -> Vec<Token> {
    tokens.sort_by_key(|t| t.start);
    let mut accepted: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut claimed_to = 0usize;
    for t in tokens {
        if t.start < claimed_to {
            continue;
        }
        claimed_to = t.end;
        accepted.push(t);
    }
    accepted
}

fn styled_run(t: &Token) -> RichText {
    match &t.style {
        Style::Strong => text_run(&t.inner, Annotations::bold(), None),
        Style::Emphasis => text_run(&t.inner, Annotations::italic(), None),
        Style::Code => text_run(
            &t.inner,
            Annotations {
                code: true,
                ..Annotations::default()
            },
            None,
        ),
        Style::Strike => text_run(
            &t.inner,
            Annotations {
                strikethrough: true,
                ..Annotations::default()
            },
            None,
        ),
        Style::Link(url) => {
            if is_http_url(url) {
                text_run(&t.inner, Annotations::default(), Some(url.clone()))
            } else {
                tracing::warn!(url = %url, "inline link target is not an http(s) URL; keeping label only");
                text_run(&t.inner, Annotations::default(), None)
            }
        }
    }
}

/// Split `text` into styled runs using the inline markdown subset.
///
/// Never returns an empty list: text without markers (including the empty string) is one run.
pub fn format(text: &str) -> Vec<RichText> {
    let tokens = resolve_overlaps(scan(text));
    if tokens.is_empty() {
        return vec![RichText::plain(text)];
    }

    let mut runs = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut cursor = 0usize;
    for t in &tokens {
        if t.start > cursor {
            runs.push(piece_run(&text[cursor..t.start], Annotations::default(), None));
        }
        runs.push(styled_run(t));
        cursor = t.end;
    }
    if cursor < text.len() {
        runs.push(piece_run(&text[cursor..], Annotations::default(), None));
    }
    runs
}

/// Resolve any [`TextInput`] into runs.
///
/// Plain strings go through [`format`] when `markdown` is set, otherwise they become one run.
/// Segments map one-to-one to runs and pre-built runs are rebuilt through the run constructor;
/// either list may be empty.
pub fn format_input(input: &TextInput, markdown: bool) -> Vec<RichText> {
    match input {
        TextInput::Plain(s) if markdown => format(s),
        TextInput::Plain(s) => vec![RichText::plain(s)],
        TextInput::Segments(segs) => segs.iter().map(|s| s.to_run()).collect(),
        TextInput::Runs(runs) => runs.iter().map(RichText::normalized).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/format.rs"]
mod tests;
