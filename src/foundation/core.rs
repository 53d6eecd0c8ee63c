use serde::{Deserialize, Serialize};

/// Text and block colors understood by the page service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Service default (no color).
    #[default]
    Default,
    /// Gray text.
    Gray,
    /// Brown text.
    Brown,
    /// Orange text.
    Orange,
    /// Yellow text.
    Yellow,
    /// Green text.
    Green,
    /// Blue text.
    Blue,
    /// Purple text.
    Purple,
    /// Pink text.
    Pink,
    /// Red text.
    Red,
    /// Gray background.
    GrayBackground,
    /// Brown background.
    BrownBackground,
    /// Orange background.
    OrangeBackground,
    /// Yellow background.
    YellowBackground,
    /// Green background.
    GreenBackground,
    /// Blue background.
    BlueBackground,
    /// Purple background.
    PurpleBackground,
    /// Pink background.
    PinkBackground,
    /// Red background.
    RedBackground,
}

impl Color {
    /// Look up a color by its service name (`"blue"`, `"red_background"`, ...).
    ///
    /// Matching is case-insensitive and accepts `-` or `_` separators. Unknown names yield `None`
    /// so callers can keep their own default.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim().to_ascii_lowercase().replace('-', "_");
        let c = match n.as_str() {
            "default" => Self::Default,
            "gray" | "grey" => Self::Gray,
            "brown" => Self::Brown,
            "orange" => Self::Orange,
            "yellow" => Self::Yellow,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "purple" => Self::Purple,
            "pink" => Self::Pink,
            "red" => Self::Red,
            "gray_background" | "grey_background" => Self::GrayBackground,
            "brown_background" => Self::BrownBackground,
            "orange_background" => Self::OrangeBackground,
            "yellow_background" => Self::YellowBackground,
            "green_background" => Self::GreenBackground,
            "blue_background" => Self::BlueBackground,
            "purple_background" => Self::PurpleBackground,
            "pink_background" => Self::PinkBackground,
            "red_background" => Self::RedBackground,
            _ => return None,
        };
        Some(c)
    }

    /// `true` for the default color; used to keep annotations compact.
    pub fn is_default(&self) -> bool {
        *self == Self::Default
    }
}

/// Emoji icon attached to callouts and pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    /// A single emoji.
    Emoji {
        /// The emoji text.
        emoji: String,
    },
}

impl Icon {
    /// Build an emoji icon.
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji {
            emoji: emoji.into(),
        }
    }

    /// Borrow the emoji text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Emoji { emoji } => emoji,
        }
    }
}

/// `true` when `s` parses as an absolute URL with an `http` or `https` scheme.
pub fn is_http_url(s: &str) -> bool {
    match url::Url::parse(s.trim()) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
