//! Output block model and leaf builders.
//!
//! Every builder is a pure function. Text builders that can legitimately produce nothing return
//! `Option<Block>`; builders that validate their input expose a `try_*` form returning
//! `Result<Block, BuildIssue>` next to a degrading form that turns the issue into a visible
//! placeholder.

/// Code and equation blocks.
pub mod code;
/// Soft build failures and their placeholder blocks.
pub mod issue;
/// Layout primitives (dividers, columns, tables, synced blocks).
pub mod layout;
/// URL-bearing media blocks.
pub mod media;
/// Block tree types.
pub mod model;
/// Text-bearing blocks.
pub mod text;

pub use issue::BuildIssue;
pub use model::Block;
