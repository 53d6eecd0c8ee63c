use crate::blocks::model::Block;
use crate::foundation::error::{CourseError, CourseResult};
use crate::publish::request::CreatePageRequest;
use serde::Serialize;
use std::fmt;

/// Id the page service assigned to a created page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    /// Wrap a service id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sink contract for the page service.
///
/// Ordering contract: `create_page` is called once, then `append_children` is called with
/// consecutive batches in document order. No call is issued before the previous one returned.
pub trait PageSink {
    /// Create the page with its first batch of children.
    fn create_page(&mut self, req: &CreatePageRequest) -> CourseResult<PageId>;
    /// Append the next batch of top-level blocks to `page`.
    fn append_children(&mut self, page: &PageId, children: &[Block]) -> CourseResult<()>;
}

/// One call received by an [`InMemoryPageSink`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Create(CreatePageRequest),
    Append { page: PageId, children: Vec<Block> },
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryPageSink {
    /// Calls in the order they were made.
    pub calls: Vec<SinkCall>,
    fail_at: Option<usize>,
}

impl InMemoryPageSink {
    /// Sink accepting every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink rejecting the call with 0-based position `call` (and accepting the ones before it).
    pub fn failing_at(call: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(call),
        }
    }

    /// Blocks received so far, across all calls, in order.
    pub fn blocks(&self) -> Vec<&Block> {
        self.calls
            .iter()
            .flat_map(|c| match c {
                SinkCall::Create(req) => req.children.iter(),
                SinkCall::Append { children, .. } => children.iter(),
            })
            .collect()
    }

    fn check(&self) -> CourseResult<()> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(CourseError::remote(format!(
                "call {} rejected by test sink",
                self.calls.len()
            )));
        }
        Ok(())
    }
}

impl PageSink for InMemoryPageSink {
    fn create_page(&mut self, req: &CreatePageRequest) -> CourseResult<PageId> {
        self.check()?;
        self.calls.push(SinkCall::Create(req.clone()));
        Ok(PageId::new("in-memory-page"))
    }

    fn append_children(&mut self, page: &PageId, children: &[Block]) -> CourseResult<()> {
        self.check()?;
        self.calls.push(SinkCall::Append {
            page: page.clone(),
            children: children.to_vec(),
        });
        Ok(())
    }
}
