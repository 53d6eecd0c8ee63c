use crate::blocks::model::{
    Block, Container, Empty, SyncedBlock, SyncedFrom, Table, TableOfContents, TableRow,
};
use crate::text::format::format;
use crate::text::run::RichText;

/// Divider.
pub fn divider() -> Block {
    Block::Divider { divider: Empty {} }
}

/// Table of contents.
pub fn table_of_contents() -> Block {
    Block::TableOfContents {
        table_of_contents: TableOfContents::default(),
    }
}

/// Breadcrumb.
pub fn breadcrumb() -> Block {
    Block::Breadcrumb {
        breadcrumb: Empty {},
    }
}

/// One column of a column layout.
pub fn column(children: Vec<Block>) -> Block {
    Block::Column {
        column: Container { children },
    }
}

/// Column layout; empty columns are dropped and `None` is returned when none remain.
///
/// The service needs at least two columns to render side by side; a single non-empty column is
/// still emitted and shows as a plain stack.
pub fn columns(cols: Vec<Vec<Block>>) -> Option<Block> {
    let children: Vec<Block> = cols
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(column)
        .collect();
    if children.is_empty() {
        return None;
    }
    Some(Block::ColumnList {
        column_list: Container { children },
    })
}

/// A table cell as supplied by callers.
#[derive(Clone, Debug, PartialEq)]
pub enum TableCell {
    /// Text, formatted with the inline formatter.
    Text(String),
    /// Runs used as-is.
    Runs(Vec<RichText>),
}

impl From<&str> for TableCell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for TableCell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<RichText>> for TableCell {
    fn from(runs: Vec<RichText>) -> Self {
        Self::Runs(runs)
    }
}

impl TableCell {
    fn into_runs(self) -> Vec<RichText> {
        match self {
            Self::Text(s) if s.is_empty() => Vec::new(),
            Self::Text(s) => format(&s),
            Self::Runs(r) => r,
        }
    }
}

/// Table whose width is the length of row 0; later rows are padded or cut to that width.
///
/// Returns `None` when there are no rows or row 0 is empty.
pub fn table(
    rows: Vec<Vec<TableCell>>,
    has_column_header: bool,
    has_row_header: bool,
) -> Option<Block> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return None;
    }
    let children = rows
        .into_iter()
        .map(|row| {
            let mut cells: Vec<Vec<RichText>> =
                row.into_iter().take(width).map(TableCell::into_runs).collect();
            cells.resize_with(width, Vec::new);
            Block::TableRow {
                table_row: TableRow { cells },
            }
        })
        .collect();
    Some(Block::Table {
        table: Table {
            table_width: width,
            has_column_header,
            has_row_header,
            children,
        },
    })
}

/// Original synced block holding `children`.
pub fn synced_original(children: Vec<Block>) -> Block {
    Block::SyncedBlock {
        synced_block: SyncedBlock {
            synced_from: None,
            children,
        },
    }
}

/// Reference to an existing synced block, or `None` for a blank id.
pub fn synced_reference(block_id: &str) -> Option<Block> {
    let id = block_id.trim();
    if id.is_empty() {
        return None;
    }
    Some(Block::SyncedBlock {
        synced_block: SyncedBlock {
            synced_from: Some(SyncedFrom {
                block_id: id.to_owned(),
            }),
            children: Vec::new(),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/blocks/layout.rs"]
mod tests;
