use crate::blocks::issue::BuildIssue;
use crate::schema::path::JsonPath;
use serde::Serialize;

/// A degraded item and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Location of the item in the course description.
    pub path: String,
    /// What went wrong.
    #[serde(flatten)]
    pub issue: BuildIssue,
    /// Rendered issue message.
    pub message: String,
}

/// Issues collected during one compilation, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `issue` at `path` and log it.
    pub fn record(&mut self, path: &JsonPath, issue: BuildIssue) {
        let path = path.to_string();
        tracing::warn!(%path, %issue, "content item degraded");
        self.entries.push(Diagnostic {
            message: issue.to_string(),
            path,
            issue,
        });
    }

    /// No issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Recorded issues in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/diagnostics.rs"]
mod tests;
