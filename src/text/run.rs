use crate::foundation::core::{Color, is_http_url};
use serde::{Deserialize, Serialize};

/// Maximum characters the page service accepts in one run.
pub const MAX_RUN_CHARS: usize = 2000;

const ELLIPSIS: &str = "...";

/// Style flags of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    /// Bold.
    #[serde(default)]
    pub bold: bool,
    /// Italic.
    #[serde(default)]
    pub italic: bool,
    /// Strikethrough.
    #[serde(default)]
    pub strikethrough: bool,
    /// Underline.
    #[serde(default)]
    pub underline: bool,
    /// Inline code.
    #[serde(default)]
    pub code: bool,
    /// Text color.
    #[serde(default)]
    pub color: Color,
}

impl Annotations {
    /// Bold only.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    /// Italic only.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    /// Plain text in `color`.
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

/// Hyperlink target of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL.
    pub url: String,
}

/// Text payload of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// Visible text, never empty.
    pub content: String,
    /// Optional hyperlink.
    #[serde(default)]
    pub link: Option<Link>,
}

/// One atomic styled span of text.
///
/// Serialized in the page service's shape: `{"type":"text","text":{..},"annotations":{..}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "text")]
pub struct RichText {
    /// Content and link.
    pub text: TextContent,
    /// Style flags.
    #[serde(default)]
    pub annotations: Annotations,
}

impl RichText {
    /// Build a run through [`text_run`] with default annotations.
    pub fn plain(content: &str) -> Self {
        text_run(content, Annotations::default(), None)
    }

    /// Build a bold run through [`text_run`].
    pub fn bold(content: &str) -> Self {
        text_run(content, Annotations::bold(), None)
    }

    /// Build a run colored `color`.
    pub fn colored(content: &str, color: Color) -> Self {
        text_run(content, Annotations::colored(color), None)
    }

    /// Visible text.
    pub fn content(&self) -> &str {
        &self.text.content
    }

    /// Link target, if any.
    pub fn link(&self) -> Option<&str> {
        self.text.link.as_ref().map(|l| l.url.as_str())
    }

    /// Rebuild a pre-built run under the run constraints: empty content becomes a space,
    /// overlong content is cut, and a link that is not http(s) is dropped.
    pub fn normalized(&self) -> Self {
        let link = self.link().filter(|u| is_http_url(u)).map(str::to_owned);
        piece_run(self.content(), self.annotations, link)
    }
}

/// The single-run constructor every run goes through.
///
/// Empty or all-whitespace content becomes a single space (the service rejects empty runs);
/// content longer than [`MAX_RUN_CHARS`] is cut and ends with `...`.
pub fn text_run(content: &str, annotations: Annotations, link: Option<String>) -> RichText {
    let content = if content.trim().is_empty() { "" } else { content };
    piece_run(content, annotations, link)
}

/// Run for a piece cut out of a larger text: whitespace is kept as written and only an empty
/// piece becomes a single space.
pub(crate) fn piece_run(
    content: &str,
    annotations: Annotations,
    link: Option<String>,
) -> RichText {
    let content = if content.is_empty() {
        " ".to_owned()
    } else {
        truncate_chars(content, MAX_RUN_CHARS)
    };
    RichText {
        text: TextContent {
            content,
            link: link.map(|url| Link { url }),
        },
        annotations,
    }
}

/// Cut `s` to at most `max` characters, ending in an ellipsis when cut.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let keep = max.saturating_sub(ELLIPSIS.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Concatenate the visible text of `runs`.
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(RichText::content).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/run.rs"]
mod tests;
