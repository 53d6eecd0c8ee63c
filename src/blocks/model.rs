use crate::foundation::core::{Color, Icon};
use crate::text::run::RichText;
use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

/// Payload shared by paragraph, quote, list item and toggle blocks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Visible text.
    pub rich_text: Vec<RichText>,
    /// Block color.
    #[serde(default)]
    pub color: Color,
    /// Nested blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Heading payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Visible text.
    pub rich_text: Vec<RichText>,
    /// Heading color.
    #[serde(default)]
    pub color: Color,
    /// Whether the heading collapses its children.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_toggleable: bool,
    /// Children, only meaningful when toggleable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Callout payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    /// Visible text.
    pub rich_text: Vec<RichText>,
    /// Leading icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Background or text color.
    #[serde(default)]
    pub color: Color,
    /// Nested blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// To-do payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToDo {
    /// Visible text.
    pub rich_text: Vec<RichText>,
    /// Checkbox state.
    #[serde(default)]
    pub checked: bool,
    /// Block color.
    #[serde(default)]
    pub color: Color,
    /// Nested blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Code payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Code {
    /// Source text split into runs of at most 2000 characters.
    pub rich_text: Vec<RichText>,
    /// Language from the service vocabulary.
    pub language: String,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

/// Equation payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    /// KaTeX expression.
    pub expression: String,
}

/// URL wrapper used by external files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrl {
    /// Absolute URL.
    pub url: String,
}

/// Externally hosted file (image, video, audio, pdf, file).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "external")]
pub struct ExternalFile {
    /// Location.
    pub external: ExternalUrl,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

/// Embed payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Embedded page URL.
    pub url: String,
}

/// Bookmark payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Bookmarked URL.
    pub url: String,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

/// Payload of blocks that carry no fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Table-of-contents payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    /// Text color.
    #[serde(default)]
    pub color: Color,
}

/// Container payload for column lists and columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Nested blocks (columns for a column list).
    #[serde(default)]
    pub children: Vec<Block>,
}

/// Table payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Number of columns, fixed at creation.
    pub table_width: usize,
    /// First row is a header.
    #[serde(default)]
    pub has_column_header: bool,
    /// First column is a header.
    #[serde(default)]
    pub has_row_header: bool,
    /// `table_row` blocks.
    #[serde(default)]
    pub children: Vec<Block>,
}

/// Table row payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// One run list per cell.
    pub cells: Vec<Vec<RichText>>,
}

/// Source of a synced block reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "block_id")]
pub struct SyncedFrom {
    /// Id of the original synced block.
    pub block_id: String,
}

/// Synced block payload; `synced_from` is `null` for an original.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncedBlock {
    /// `None` for the original, `Some` for a reference.
    pub synced_from: Option<SyncedFrom>,
    /// Content of an original.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// One node of the output content tree.
///
/// Serialized as `{"type": T, T: payload}`; children live inside the payload, which is the
/// shape the page service's create and append calls take.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: Heading,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: Heading,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: Heading,
    },
    Callout {
        callout: Callout,
    },
    Quote {
        quote: TextBlock,
    },
    Code {
        code: Code,
    },
    Equation {
        equation: Equation,
    },
    BulletedListItem {
        bulleted_list_item: TextBlock,
    },
    NumberedListItem {
        numbered_list_item: TextBlock,
    },
    ToDo {
        to_do: ToDo,
    },
    Toggle {
        toggle: TextBlock,
    },
    Image {
        image: ExternalFile,
    },
    Video {
        video: ExternalFile,
    },
    Audio {
        audio: ExternalFile,
    },
    Pdf {
        pdf: ExternalFile,
    },
    File {
        file: ExternalFile,
    },
    Embed {
        embed: Embed,
    },
    Bookmark {
        bookmark: Bookmark,
    },
    Divider {
        divider: Empty,
    },
    TableOfContents {
        table_of_contents: TableOfContents,
    },
    Breadcrumb {
        breadcrumb: Empty,
    },
    ColumnList {
        column_list: Container,
    },
    Column {
        column: Container,
    },
    Table {
        table: Table,
    },
    TableRow {
        table_row: TableRow,
    },
    SyncedBlock {
        synced_block: SyncedBlock,
    },
}

impl Block {
    /// The service type tag (`"paragraph"`, `"heading_1"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading1 { .. } => "heading_1",
            Self::Heading2 { .. } => "heading_2",
            Self::Heading3 { .. } => "heading_3",
            Self::Callout { .. } => "callout",
            Self::Quote { .. } => "quote",
            Self::Code { .. } => "code",
            Self::Equation { .. } => "equation",
            Self::BulletedListItem { .. } => "bulleted_list_item",
            Self::NumberedListItem { .. } => "numbered_list_item",
            Self::ToDo { .. } => "to_do",
            Self::Toggle { .. } => "toggle",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Audio { .. } => "audio",
            Self::Pdf { .. } => "pdf",
            Self::File { .. } => "file",
            Self::Embed { .. } => "embed",
            Self::Bookmark { .. } => "bookmark",
            Self::Divider { .. } => "divider",
            Self::TableOfContents { .. } => "table_of_contents",
            Self::Breadcrumb { .. } => "breadcrumb",
            Self::ColumnList { .. } => "column_list",
            Self::Column { .. } => "column",
            Self::Table { .. } => "table",
            Self::TableRow { .. } => "table_row",
            Self::SyncedBlock { .. } => "synced_block",
        }
    }

    /// The block's own runs, for text-bearing blocks.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            Self::Paragraph { paragraph: t }
            | Self::Quote { quote: t }
            | Self::BulletedListItem {
                bulleted_list_item: t,
            }
            | Self::NumberedListItem {
                numbered_list_item: t,
            }
            | Self::Toggle { toggle: t } => Some(&t.rich_text),
            Self::Heading1 { heading_1: h }
            | Self::Heading2 { heading_2: h }
            | Self::Heading3 { heading_3: h } => Some(&h.rich_text),
            Self::Callout { callout } => Some(&callout.rich_text),
            Self::ToDo { to_do } => Some(&to_do.rich_text),
            Self::Code { code } => Some(&code.rich_text),
            _ => None,
        }
    }

    /// Concatenated visible text of this block (not of its children).
    pub fn plain_text(&self) -> String {
        match self {
            Self::Equation { equation } => equation.expression.clone(),
            _ => self
                .rich_text()
                .map(crate::text::run::plain_text)
                .unwrap_or_default(),
        }
    }

    /// Nested blocks.
    pub fn children(&self) -> &[Block] {
        match self {
            Self::Paragraph { paragraph: t }
            | Self::Quote { quote: t }
            | Self::BulletedListItem {
                bulleted_list_item: t,
            }
            | Self::NumberedListItem {
                numbered_list_item: t,
            }
            | Self::Toggle { toggle: t } => &t.children,
            Self::Heading1 { heading_1: h }
            | Self::Heading2 { heading_2: h }
            | Self::Heading3 { heading_3: h } => &h.children,
            Self::Callout { callout } => &callout.children,
            Self::ToDo { to_do } => &to_do.children,
            Self::ColumnList { column_list: c } | Self::Column { column: c } => &c.children,
            Self::Table { table } => &table.children,
            Self::SyncedBlock { synced_block } => &synced_block.children,
            _ => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Self::Paragraph { paragraph: t }
            | Self::Quote { quote: t }
            | Self::BulletedListItem {
                bulleted_list_item: t,
            }
            | Self::NumberedListItem {
                numbered_list_item: t,
            }
            | Self::Toggle { toggle: t } => Some(&mut t.children),
            Self::Heading1 { heading_1: h }
            | Self::Heading2 { heading_2: h }
            | Self::Heading3 { heading_3: h } => Some(&mut h.children),
            Self::Callout { callout } => Some(&mut callout.children),
            Self::ToDo { to_do } => Some(&mut to_do.children),
            Self::ColumnList { column_list: c } | Self::Column { column: c } => {
                Some(&mut c.children)
            }
            Self::SyncedBlock { synced_block } if synced_block.synced_from.is_none() => {
                Some(&mut synced_block.children)
            }
            _ => None,
        }
    }

    fn color_mut(&mut self) -> Option<&mut Color> {
        match self {
            Self::Paragraph { paragraph: t }
            | Self::Quote { quote: t }
            | Self::BulletedListItem {
                bulleted_list_item: t,
            }
            | Self::NumberedListItem {
                numbered_list_item: t,
            }
            | Self::Toggle { toggle: t } => Some(&mut t.color),
            Self::Heading1 { heading_1: h }
            | Self::Heading2 { heading_2: h }
            | Self::Heading3 { heading_3: h } => Some(&mut h.color),
            Self::Callout { callout } => Some(&mut callout.color),
            Self::ToDo { to_do } => Some(&mut to_do.color),
            Self::TableOfContents { table_of_contents } => Some(&mut table_of_contents.color),
            _ => None,
        }
    }

    /// Append `children` to blocks that can hold them; other blocks are returned unchanged.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Block>) -> Self {
        if let Some(slot) = self.children_mut() {
            slot.extend(children);
        }
        self
    }

    /// Set the block color where the block type has one.
    pub fn with_color(mut self, color: Color) -> Self {
        if let Some(slot) = self.color_mut() {
            *slot = color;
        }
        self
    }

    /// Number of blocks in this subtree, including `self`.
    pub fn tree_len(&self) -> usize {
        1 + self.children().iter().map(Block::tree_len).sum::<usize>()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blocks/model.rs"]
mod tests;
