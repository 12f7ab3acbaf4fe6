//! Lexical path cleanup for reported project paths.

use std::path::{Component, Path, PathBuf};

/// Shortest path naming the same location, computed without touching the filesystem.
///
/// `.` components are dropped, `..` removes the preceding normal component,
/// `..` directly under the root is dropped, and leading `..` of a relative
/// path is kept. An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned(path: &str) -> PathBuf {
        clean(Path::new(path))
    }

    #[test]
    fn test_already_clean() {
        assert_eq!(cleaned("abc"), PathBuf::from("abc"));
        assert_eq!(cleaned("abc/def"), PathBuf::from("abc/def"));
        assert_eq!(cleaned("/abc"), PathBuf::from("/abc"));
        assert_eq!(cleaned("/"), PathBuf::from("/"));
        assert_eq!(cleaned("."), PathBuf::from("."));
        assert_eq!(cleaned(".."), PathBuf::from(".."));
    }

    #[test]
    fn test_drops_current_dir() {
        assert_eq!(cleaned("./proj"), PathBuf::from("proj"));
        assert_eq!(cleaned("abc/./def"), PathBuf::from("abc/def"));
        assert_eq!(cleaned("./"), PathBuf::from("."));
    }

    #[test]
    fn test_removes_redundant_separators() {
        assert_eq!(cleaned("abc//def/"), PathBuf::from("abc/def"));
        assert_eq!(cleaned("//abc"), PathBuf::from("/abc"));
    }

    #[test]
    fn test_resolves_parent_dir() {
        assert_eq!(cleaned("proj/../proj"), PathBuf::from("proj"));
        assert_eq!(cleaned("abc/def/../ghi"), PathBuf::from("abc/ghi"));
        assert_eq!(cleaned("abc/.."), PathBuf::from("."));
        assert_eq!(cleaned("abc/../../x"), PathBuf::from("../x"));
        assert_eq!(cleaned("../../abc"), PathBuf::from("../../abc"));
    }

    #[test]
    fn test_parent_of_root_is_root() {
        assert_eq!(cleaned("/.."), PathBuf::from("/"));
        assert_eq!(cleaned("/../abc"), PathBuf::from("/abc"));
    }
}
