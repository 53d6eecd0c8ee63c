//! Course description to block tree.

/// Dry-run analysis.
pub mod analysis;
/// The compiler proper.
pub mod compiler;
/// Per-item issues recorded while compiling.
pub mod diagnostics;

pub use analysis::{Analysis, dry_run};
pub use compiler::{CompileOpts, compile, compile_with_diagnostics};
pub use diagnostics::{Diagnostic, Diagnostics};
