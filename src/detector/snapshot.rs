//! Immediate contents of a single directory.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Names found by one non-recursive read of a directory.
///
/// Matching is done against sets, so the order in which the filesystem
/// enumerates entries never influences classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySnapshot {
    files: HashSet<String>,
    extensions: HashSet<String>,
    directories: HashSet<String>,
}

impl DirectorySnapshot {
    /// Read the immediate entries of `dir`.
    ///
    /// Symbolic links are not followed, so a link to a directory is
    /// recorded as a file.
    pub fn read(dir: &Path) -> io::Result<Self> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
        }
        Ok(Self::from_entries(entries))
    }

    /// Build a snapshot from `(name, is_dir)` pairs without touching the filesystem.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut snapshot = Self::default();
        for (name, is_dir) in entries {
            let name = name.into();
            if is_dir {
                snapshot.directories.insert(name);
            } else {
                if let Some(ext) = extension_of(&name) {
                    snapshot.extensions.insert(ext.to_string());
                }
                snapshot.files.insert(name);
            }
        }
        snapshot
    }

    /// Check if a non-directory entry with this exact name exists.
    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Check if any non-directory entry has this extension (dot included).
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extensions.contains(ext)
    }

    /// Check if a subdirectory with this exact name exists.
    pub fn has_directory(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    /// True if the directory had no entries at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Everything from the last `.` to the end, dot included.
fn extension_of(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}
