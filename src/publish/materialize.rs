use crate::compile::compiler::{CompileOpts, compile};
use crate::course::model::CourseDef;
use crate::foundation::error::{CourseError, CourseResult};
use crate::publish::request::CreatePageRequest;
use crate::publish::sink::{PageId, PageSink};
use crate::schema::validate::validate;
use serde::Serialize;

/// Most top-level blocks the service accepts in one request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Publishing switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOpts {
    /// Blocks per request, clamped to `1..=MAX_BATCH_SIZE`.
    pub batch_size: usize,
    /// Refuse to publish a course with validation errors.
    pub validate_first: bool,
    /// Options forwarded to the compiler.
    pub compile: CompileOpts,
}

impl Default for MaterializeOpts {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
            validate_first: true,
            compile: CompileOpts::default(),
        }
    }
}

impl MaterializeOpts {
    fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH_SIZE)
    }
}

/// What a successful publish did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReport {
    /// Id of the created page.
    pub page_id: PageId,
    /// Sections in the course.
    pub sections: usize,
    /// Top-level blocks sent.
    pub blocks: usize,
    /// Requests issued, page creation included.
    pub batches: usize,
}

/// Sink failures end the publish as remote errors, whatever their local cause.
fn remote(e: CourseError) -> CourseError {
    match e {
        CourseError::Remote(_) => e,
        other => CourseError::remote(other.to_string()),
    }
}

/// Drives a [`PageSink`]: validate, compile, create, then append the remaining batches in order.
#[derive(Debug)]
pub struct Materializer<S> {
    sink: S,
    opts: MaterializeOpts,
}

impl<S: PageSink> Materializer<S> {
    /// Materializer over `sink`.
    pub fn new(sink: S, opts: MaterializeOpts) -> Self {
        Self { sink, opts }
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Publish `def` as one page.
    ///
    /// Validation errors are reported before any sink call. The first sink error aborts the
    /// publish; blocks already sent stay on the page.
    #[tracing::instrument(skip_all, fields(title = def.title.as_deref().unwrap_or("")))]
    pub fn publish(&mut self, def: &CourseDef) -> CourseResult<PublishReport> {
        if self.opts.validate_first {
            let report = validate(def);
            if !report.valid {
                return Err(CourseError::validation(format!(
                    "course has {} error(s):\n{report}",
                    report.errors.len()
                )));
            }
        }

        let blocks = compile(def, &self.opts.compile);
        let mut batches = blocks.chunks(self.opts.effective_batch_size());
        let first = batches.next().unwrap_or_default();
        let req = CreatePageRequest::from_course(def, first.to_vec())?;

        let page_id = self.sink.create_page(&req).map_err(remote)?;
        tracing::debug!(page = %page_id, blocks = first.len(), "created page");

        let mut sent = 1;
        for batch in batches {
            tracing::debug!(page = %page_id, batch = sent, blocks = batch.len(), "appending batch");
            self.sink.append_children(&page_id, batch).map_err(remote)?;
            sent += 1;
        }

        tracing::info!(page = %page_id, blocks = blocks.len(), batches = sent, "published course");
        Ok(PublishReport {
            page_id,
            sections: def.sections.len(),
            blocks: blocks.len(),
            batches: sent,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/publish/materialize.rs"]
mod tests;
