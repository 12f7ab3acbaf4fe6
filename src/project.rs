//! Scan result record.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// A directory recognized as the root of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Name of the rule that matched (e.g., "Rust").
    #[serde(rename = "type")]
    pub project_type: String,
    /// Directory path, built from the root path as it was supplied.
    pub path: PathBuf,
}

impl Project {
    pub fn new(project_type: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            project_type: project_type.into(),
            path: path.into(),
        }
    }
}

impl Display for Project {
    /// Tab-separated `<type>\t<path>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.project_type, self.path.display())
    }
}
