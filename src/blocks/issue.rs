use crate::blocks::model::{Block, TextBlock};
use crate::foundation::core::Color;
use crate::text::run::RichText;
use serde::Serialize;

/// A soft failure while building one block.
///
/// Issues never abort a compilation. Fatal-for-the-block issues are replaced by
/// [`BuildIssue::placeholder`]; the rest leave a usable (clamped or truncated) block behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildIssue {
    /// URL missing or not `http`/`https`.
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        /// The rejected URL as written.
        url: String,
    },
    /// A quiz needs at least two options.
    #[error("Quiz error: at least 2 options are required (got {count})")]
    TooFewOptions {
        /// Options supplied.
        count: usize,
    },
    /// A quiz answer index outside the option list; clamped to the first option.
    #[error("Quiz answer index {index} is out of range for {len} options; using option A")]
    AnswerOutOfRange {
        /// Index as written.
        index: i64,
        /// Number of options.
        len: usize,
    },
    /// Code longer than the service limit was cut.
    #[error("Code block truncated from {chars} to {max} characters")]
    CodeTruncated {
        /// Original length.
        chars: usize,
        /// Limit applied.
        max: usize,
    },
    /// Content type tag not understood by the compiler.
    #[error("Unknown content type: \"{name}\"")]
    UnknownType {
        /// The tag as written.
        name: String,
    },
}

impl BuildIssue {
    /// Visible paragraph standing in for a block that could not be built.
    pub fn placeholder(&self) -> Block {
        Block::Paragraph {
            paragraph: TextBlock {
                rich_text: vec![RichText::colored(&format!("⚠️ {self}"), Color::Red)],
                ..TextBlock::default()
            },
        }
    }
}
