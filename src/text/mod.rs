//! Styled text runs and the inline formatter.

/// Inline markdown-subset formatter.
pub mod format;
/// Caller-facing text input shapes.
pub mod input;
/// The atomic styled run and its single-run constructor.
pub mod run;
