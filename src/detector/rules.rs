//! Built-in project type rules.

use super::Rule;

/// Go modules.
pub const GO: Rule = Rule::named("Go").with_files(&["go.mod", "go.sum"]);

/// Node.js packages.
pub const NODE: Rule =
    Rule::named("Node").with_files(&["package.json", "package-lock.json", "yarn.lock"]);

/// Python projects, including loose scripts.
pub const PYTHON: Rule = Rule::named("Python")
    .with_files(&["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"])
    .with_extensions(&[".py"]);

/// .NET projects and solutions.
pub const DOTNET: Rule = Rule::named("DotNet").with_extensions(&[".csproj", ".sln"]);

/// Cargo packages and workspaces.
pub const RUST: Rule = Rule::named("Rust").with_files(&["Cargo.toml", "Cargo.lock"]);

/// Maven and Gradle projects, including loose sources.
pub const JAVA: Rule = Rule::named("Java")
    .with_files(&["pom.xml", "build.gradle"])
    .with_extensions(&[".java"]);

/// Any git checkout not claimed by a language rule.
pub const GIT: Rule = Rule::named("Git").with_directories(&[".git"]);

/// Returns all built-in rules in priority order.
pub fn default_rules() -> Vec<Rule> {
    vec![GO, NODE, PYTHON, DOTNET, RUST, JAVA, GIT]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::DirectorySnapshot;

    fn files(names: &[&str]) -> DirectorySnapshot {
        DirectorySnapshot::from_entries(names.iter().map(|n| (*n, false)))
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<&str> = default_rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Go", "Node", "Python", "DotNet", "Rust", "Java", "Git"]
        );
    }

    #[test]
    fn test_go_detection() {
        assert!(GO.matches(&files(&["go.mod"])));
        assert!(GO.matches(&files(&["go.sum"])));
        assert!(!GO.matches(&files(&["main.go"])));
    }

    #[test]
    fn test_node_detection() {
        assert!(NODE.matches(&files(&["package.json"])));
        assert!(NODE.matches(&files(&["yarn.lock"])));
        assert!(!NODE.matches(&files(&["index.js"])));
    }

    #[test]
    fn test_python_detection() {
        assert!(PYTHON.matches(&files(&["Pipfile"])));
        assert!(PYTHON.matches(&files(&["script.py"])));
        assert!(!PYTHON.matches(&files(&["script.pyc"])));
    }

    #[test]
    fn test_dotnet_detection() {
        assert!(DOTNET.matches(&files(&["App.csproj"])));
        assert!(DOTNET.matches(&files(&["App.sln"])));
        assert!(!DOTNET.matches(&files(&["Program.cs"])));
    }

    #[test]
    fn test_rust_detection() {
        assert!(RUST.matches(&files(&["Cargo.toml"])));
        assert!(RUST.matches(&files(&["Cargo.lock"])));
        assert!(!RUST.matches(&files(&["main.rs"])));
    }

    #[test]
    fn test_java_detection() {
        assert!(JAVA.matches(&files(&["pom.xml"])));
        assert!(JAVA.matches(&files(&["Main.java"])));
        assert!(!JAVA.matches(&files(&["main.JAVA"])));
        assert!(!JAVA.matches(&files(&["build.gradle.kts"])));
    }

    #[test]
    fn test_git_detection() {
        let snapshot = DirectorySnapshot::from_entries([(".git", true)]);
        assert!(GIT.matches(&snapshot));

        // Worktrees and submodules have a `.git` file, not a directory.
        assert!(!GIT.matches(&files(&[".git"])));
    }
}
