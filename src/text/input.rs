use crate::foundation::core::{Color, is_http_url};
use crate::foundation::lenient::{as_bool, as_string};
use crate::text::run::{Annotations, RichText, text_run};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A caller-supplied text segment with explicit formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    /// Segment text.
    pub text: String,
    /// Bold.
    pub bold: bool,
    /// Italic.
    pub italic: bool,
    /// Underline.
    pub underline: bool,
    /// Strikethrough.
    pub strikethrough: bool,
    /// Inline code.
    pub code: bool,
    /// Color name; unknown names fall back to the default color.
    pub color: Option<String>,
    /// Hyperlink target.
    pub link: Option<String>,
}

impl Segment {
    /// An unstyled segment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Mark the segment bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the segment italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Attach a link.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Convert directly into a run, bypassing pattern search.
    pub fn to_run(&self) -> RichText {
        let annotations = Annotations {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strikethrough: self.strikethrough,
            code: self.code,
            color: self
                .color
                .as_deref()
                .and_then(Color::from_name)
                .unwrap_or_default(),
        };
        let link = self.link.clone().filter(|u| is_http_url(u));
        text_run(&self.text, annotations, link)
    }

    fn from_value(v: &Value) -> Option<Self> {
        if let Some(s) = as_string(v) {
            return Some(Self::new(s));
        }
        let obj = v.as_object()?;
        let text = obj.get("text").and_then(as_string)?;
        let flag = |k: &str| obj.get(k).is_some_and(as_bool);
        Some(Self {
            text,
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
            strikethrough: flag("strikethrough"),
            code: flag("code"),
            color: obj.get("color").and_then(as_string),
            link: obj
                .get("link")
                .or_else(|| obj.get("url"))
                .and_then(as_string),
        })
    }
}

/// Text accepted by every text-bearing builder.
///
/// Resolved once at the formatter boundary by [`crate::text::format::format_input`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextInput {
    /// Raw string, optionally scanned for inline markdown.
    Plain(String),
    /// Explicitly formatted segments.
    Segments(Vec<Segment>),
    /// Runs that are already built.
    Runs(Vec<RichText>),
}

impl TextInput {
    /// Read any JSON value as text input; `None` when nothing text-like is present.
    ///
    /// Arrays whose elements look like service runs (`{"type":"text","text":{..}}`) become
    /// [`TextInput::Runs`]; other arrays become segments, skipping unusable elements.
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Array(items) => {
                let looks_like_runs = !items.is_empty()
                    && items
                        .iter()
                        .all(|i| i.get("text").is_some_and(Value::is_object));
                if looks_like_runs
                    && let Ok(runs) = serde_json::from_value::<Vec<RichText>>(v.clone())
                {
                    return Some(Self::Runs(runs));
                }
                Some(Self::Segments(
                    items.iter().filter_map(Segment::from_value).collect(),
                ))
            }
            Value::Object(_) => Segment::from_value(v).map(|s| Self::Segments(vec![s])),
            other => as_string(other).map(Self::Plain),
        }
    }

    /// Visible character count before formatting, used for length warnings.
    pub fn char_len(&self) -> usize {
        match self {
            Self::Plain(s) => s.chars().count(),
            Self::Segments(segs) => segs.iter().map(|s| s.text.chars().count()).sum(),
            Self::Runs(runs) => runs.iter().map(|r| r.content().chars().count()).sum(),
        }
    }

    /// The raw text with formatting dropped.
    pub fn raw_text(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Segments(segs) => segs.iter().map(|s| s.text.as_str()).collect(),
            Self::Runs(runs) => runs.iter().map(RichText::content).collect(),
        }
    }
}

impl From<&str> for TextInput {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_owned())
    }
}

impl From<String> for TextInput {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

impl From<&String> for TextInput {
    fn from(s: &String) -> Self {
        Self::Plain(s.clone())
    }
}

impl From<Vec<Segment>> for TextInput {
    fn from(segs: Vec<Segment>) -> Self {
        Self::Segments(segs)
    }
}

impl From<Vec<RichText>> for TextInput {
    fn from(runs: Vec<RichText>) -> Self {
        Self::Runs(runs)
    }
}

impl From<&TextInput> for TextInput {
    fn from(t: &TextInput) -> Self {
        t.clone()
    }
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&v).unwrap_or(Self::Segments(Vec::new())))
    }
}

/// Read a list of text inputs; a lone string or segment becomes a one-element list.
pub(crate) fn text_list<'de, D>(d: D) -> Result<Vec<TextInput>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::Array(items) => Ok(items.iter().filter_map(TextInput::from_value).collect()),
        Value::Null => Ok(Vec::new()),
        other => Ok(TextInput::from_value(&other).into_iter().collect()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/input.rs"]
mod tests;
