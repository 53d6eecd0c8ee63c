use crate::blocks::model::Block;
use crate::foundation::error::{CourseError, CourseResult};
use crate::publish::request::{AppendChildrenRequest, CreatePageRequest};
use crate::publish::sink::{PageId, PageSink};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Page id reported by [`JsonDirSink`], which never talks to the service.
pub const OFFLINE_PAGE_ID: &str = "offline-page";

/// Offline sink writing each request body as pretty JSON: `000-create.json`, `001-append.json`, ...
#[derive(Debug)]
pub struct JsonDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonDirSink {
    /// Sink writing into `dir`, created if missing.
    pub fn new(dir: impl AsRef<Path>) -> CourseResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| CourseError::io(format!("create output dir '{}': {e}", dir.display())))?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in call order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, kind: &str, payload: &impl Serialize) -> CourseResult<()> {
        let path = self
            .dir
            .join(format!("{:03}-{kind}.json", self.written.len()));
        let bytes = serde_json::to_vec_pretty(payload)
            .map_err(|e| CourseError::serde(format!("serialize {kind} request: {e}")))?;
        fs::write(&path, bytes)
            .map_err(|e| CourseError::io(format!("write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "wrote request");
        self.written.push(path);
        Ok(())
    }
}

impl PageSink for JsonDirSink {
    fn create_page(&mut self, req: &CreatePageRequest) -> CourseResult<PageId> {
        self.write("create", req)?;
        Ok(PageId::new(OFFLINE_PAGE_ID))
    }

    fn append_children(&mut self, page: &PageId, children: &[Block]) -> CourseResult<()> {
        self.write(
            "append",
            &AppendChildrenRequest {
                block_id: page,
                children,
            },
        )
    }
}
