//! Coursewright compiles JSON course descriptions into block trees for workspace page APIs.
//!
//! The public API follows the data flow:
//!
//! - Load a [`Course`] and [`Course::validate`] it
//! - [`compile`] it into top-level [`Block`]s, or [`dry_run`] it for an [`Analysis`]
//! - Publish the blocks through a [`PageSink`] with a [`Materializer`]
//!
//! Builders in [`blocks`] and [`templates`] are usable on their own.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Leaf block builders and the block model.
pub mod blocks;
/// The course compiler and dry-run analysis.
pub mod compile;
/// Boundary course model.
pub mod course;
/// Page materialization.
pub mod publish;
/// Validation, statistics and recommendations.
pub mod schema;
/// Pedagogical template builders.
pub mod templates;
/// Styled text runs and inline formatting.
pub mod text;

pub use crate::foundation::core::{Color, Icon, is_http_url};
pub use crate::foundation::error::{CourseError, CourseResult};

pub use crate::blocks::{Block, BuildIssue};
pub use crate::compile::{
    Analysis, CompileOpts, Diagnostic, Diagnostics, compile, compile_with_diagnostics, dry_run,
};
pub use crate::course::{ContentItem, ContentItemDef, Course, CourseDef, SectionDef};
pub use crate::publish::{
    InMemoryPageSink, JsonDirSink, MaterializeOpts, Materializer, PageId, PageSink,
    PublishReport,
};
pub use crate::schema::recommend::generate_recommendations;
pub use crate::schema::stats::CourseStats;
pub use crate::schema::validate::{ValidationIssue, ValidationResult, validate};
pub use crate::text::input::{Segment, TextInput};
pub use crate::text::run::{Annotations, RichText};
