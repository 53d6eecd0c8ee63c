//! Pre-flight checks over a course description: validation, statistics and recommendations.

/// JSON paths pointing into the course description.
pub mod path;
/// Authoring recommendations derived from statistics.
pub mod recommend;
/// Item counts by section and type.
pub mod stats;
/// Structural validation with path-addressed errors and warnings.
pub mod validate;
