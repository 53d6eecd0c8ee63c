//! The course description: raw serde model, resolved content items and the loading boundary.

/// Loading boundary.
pub mod document;
/// Content items resolved from their type tag.
pub mod item;
/// Serde model of the JSON description.
pub mod model;

pub use document::Course;
pub use item::ContentItem;
pub use model::{ContentItemDef, CourseDef, SectionDef};
