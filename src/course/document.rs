use crate::blocks::model::Block;
use crate::compile::analysis::{Analysis, dry_run};
use crate::compile::compiler::{CompileOpts, compile};
use crate::course::model::CourseDef;
use crate::foundation::error::{CourseError, CourseResult};
use crate::schema::validate::{ValidationResult, validate};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Course boundary object.
///
/// This is the JSON-facing, human-edited description of a course. Loading only fails when the
/// input is not a JSON object; every other problem is reported by [`Course::validate`] or
/// degraded during [`Course::compile`].
#[derive(Debug, Clone)]
pub struct Course {
    def: CourseDef,
}

impl Course {
    /// Parse a course from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CourseResult<Self> {
        let v: Value = serde_json::from_reader(r)
            .map_err(|e| CourseError::parse(format!("parse course JSON: {e}")))?;
        Self::from_value(v)
    }

    /// Parse a course from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CourseResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CourseError::io(format!("open course JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Read a course from an already parsed JSON value.
    pub fn from_value(v: Value) -> CourseResult<Self> {
        if !v.is_object() {
            return Err(CourseError::parse("course JSON must be an object"));
        }
        let def = serde_json::from_value(v)
            .map_err(|e| CourseError::parse(format!("read course JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Wrap a programmatically built description.
    pub fn from_def(def: CourseDef) -> Self {
        Self { def }
    }

    /// Run the pre-flight checks.
    pub fn validate(&self) -> ValidationResult {
        validate(&self.def)
    }

    /// Fail with [`CourseError::Validation`] when the course has errors.
    pub fn ensure_valid(&self) -> CourseResult<()> {
        let report = self.validate();
        if report.valid {
            Ok(())
        } else {
            Err(CourseError::validation(report.to_string()))
        }
    }

    /// Compile into top-level blocks.
    pub fn compile(&self, opts: &CompileOpts) -> Vec<Block> {
        compile(&self.def, opts)
    }

    /// Analyze without publishing.
    pub fn dry_run(&self, opts: &CompileOpts) -> Analysis {
        dry_run(&self.def, opts)
    }

    /// Course title, if any.
    pub fn title(&self) -> Option<&str> {
        self.def.title.as_deref()
    }

    /// The raw description.
    pub fn def(&self) -> &CourseDef {
        &self.def
    }
}

impl std::str::FromStr for Course {
    type Err = CourseError;

    fn from_str(s: &str) -> CourseResult<Self> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/course/document.rs"]
mod tests;
