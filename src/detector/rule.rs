//! A single project type definition.

use super::DirectorySnapshot;

/// Criteria that identify one project type.
///
/// A directory matches if ANY listed file, extension or subdirectory is
/// present among its immediate entries. Empty lists never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Project type name reported for matching directories (e.g., "Go").
    pub name: &'static str,
    /// Exact file names (e.g., "go.mod").
    pub files: &'static [&'static str],
    /// File extensions including the leading dot (e.g., ".py").
    pub extensions: &'static [&'static str],
    /// Subdirectory names (e.g., ".git").
    pub directories: &'static [&'static str],
}

impl Rule {
    /// Rule with a name and no criteria. Matches nothing until criteria are added.
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            files: &[],
            extensions: &[],
            directories: &[],
        }
    }

    pub const fn with_files(mut self, files: &'static [&'static str]) -> Self {
        self.files = files;
        self
    }

    pub const fn with_extensions(mut self, extensions: &'static [&'static str]) -> Self {
        self.extensions = extensions;
        self
    }

    pub const fn with_directories(mut self, directories: &'static [&'static str]) -> Self {
        self.directories = directories;
        self
    }

    /// Check whether this rule applies to the given directory contents.
    pub fn matches(&self, snapshot: &DirectorySnapshot) -> bool {
        self.files.iter().any(|f| snapshot.has_file(f))
            || self.extensions.iter().any(|e| snapshot.has_extension(e))
            || self.directories.iter().any(|d| snapshot.has_directory(d))
    }
}
