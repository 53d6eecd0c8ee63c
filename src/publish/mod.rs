//! Handing compiled blocks to the page service.
//!
//! The service itself sits behind [`sink::PageSink`]. [`materialize::Materializer`] drives it:
//! one create call carrying the first batch, then appends in order until every block is sent.

/// Offline sink writing request payloads to disk.
pub mod json_dir;
/// Create-then-append driver.
pub mod materialize;
/// Request payloads.
pub mod request;
/// The sink contract and an in-memory implementation.
pub mod sink;

pub use json_dir::JsonDirSink;
pub use materialize::{MaterializeOpts, Materializer, PublishReport};
pub use request::{AppendChildrenRequest, CreatePageRequest};
pub use sink::{InMemoryPageSink, PageId, PageSink, SinkCall};
