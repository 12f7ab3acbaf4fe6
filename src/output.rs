//! Result presentation.

use crate::error::Result;
use crate::project::Project;

/// One `<type>\t<path>` line per project, in result order.
pub fn format_lines(projects: &[Project]) -> String {
    let mut output = String::new();
    for project in projects {
        output.push_str(&project.to_string());
        output.push('\n');
    }
    output
}

/// Format projects as a JSON array of `{"type", "path"}` objects.
pub fn format_json(projects: &[Project], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(projects)?
    } else {
        serde_json::to_string(projects)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new("Go", "/work/api"),
            Project::new("Git", "/work/dotfiles"),
        ]
    }

    #[test]
    fn test_format_lines() {
        assert_eq!(
            format_lines(&sample()),
            "Go\t/work/api\nGit\t/work/dotfiles\n"
        );
    }

    #[test]
    fn test_format_lines_empty() {
        assert_eq!(format_lines(&[]), "");
    }

    #[test]
    fn test_format_json_compact() {
        let json = format_json(&sample(), false).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"Go","path":"/work/api"},{"type":"Git","path":"/work/dotfiles"}]"#
        );
    }

    #[test]
    fn test_format_json_pretty_is_valid() {
        let json = format_json(&sample(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[1]["type"], "Git");
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_format_json_empty() {
        assert_eq!(format_json(&[], false).unwrap(), "[]");
    }
}
