//! Project scanner for discovering projects in a directory tree.

use std::path::Path;
use walkdir::WalkDir;

use crate::detector::{DirectorySnapshot, RuleTable};
use crate::error::ScanError;
use crate::project::Project;

use super::path::clean;

/// What to do with a directory after classifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The directory is a project of the given type; its subtree is not walked.
    Claim(&'static str),
    /// Not a project; walk its subdirectories.
    Descend,
}

/// Scanner for discovering projects under one or more root paths.
///
/// Walks each root depth-first, siblings in file name order, and stops
/// descending as soon as a directory matches a rule. Unreadable
/// directories are skipped and reported, never fatal.
#[derive(Debug, Clone, Default)]
pub struct ProjectScanner {
    rules: RuleTable,
}

impl ProjectScanner {
    /// Create a new scanner with the given rule table.
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Classify a single directory from its immediate entries.
    pub fn visit(&self, dir: &Path) -> Result<Visit, ScanError> {
        let snapshot = DirectorySnapshot::read(dir).map_err(|source| ScanError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(match self.rules.classify(&snapshot) {
            Some(name) => Visit::Claim(name),
            None => Visit::Descend,
        })
    }

    /// Scan all roots in order, ignoring skipped directories.
    pub fn scan<I>(&self, roots: I) -> Vec<Project>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        self.scan_with(roots, |_| {})
    }

    /// Scan all roots in order, reporting every skipped directory to `on_error`.
    ///
    /// Results are concatenated in root order. Overlapping roots are
    /// scanned independently, so a project may be reported more than once.
    pub fn scan_with<I, F>(&self, roots: I, mut on_error: F) -> Vec<Project>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        F: FnMut(&ScanError),
    {
        let mut projects = Vec::new();
        for root in roots {
            self.scan_root(root.as_ref(), &mut projects, &mut on_error);
        }
        projects
    }

    /// Walk one root, appending matches to `projects`.
    pub fn scan_root<F>(&self, root: &Path, projects: &mut Vec<Project>, on_error: &mut F)
    where
        F: FnMut(&ScanError),
    {
        tracing::debug!(root = %root.display(), "Scanning root");

        let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

        while let Some(result) = walker.next() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    on_error(&ScanError::Walk(err));
                    continue;
                }
            };

            // Files were already considered when their parent was classified.
            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            tracing::trace!(path = %path.display(), "Visiting directory");

            match self.visit(path) {
                Ok(Visit::Claim(project_type)) => {
                    tracing::debug!(path = %path.display(), project_type, "Found project");
                    // The root is reported exactly as given; descendants are cleaned.
                    let reported = if entry.depth() == 0 {
                        path.to_path_buf()
                    } else {
                        clean(path)
                    };
                    projects.push(Project::new(project_type, reported));
                    walker.skip_current_dir();
                }
                Ok(Visit::Descend) => {}
                Err(err) => {
                    on_error(&err);
                    walker.skip_current_dir();
                }
            }
        }
    }
}

/// Scan `roots` with the built-in rule table.
pub fn scan_projects<I>(roots: I) -> Vec<Project>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    ProjectScanner::default().scan(roots)
}
