//! Injects the project name into `.env` and `src/main.ts`

const ENV_MARKER: &str = "PROJECT_NAME=";
const ENTRY_MARKER: &str = "export const pluginName";

/// Replace the first line matching `predicate` with `replacement`.
///
/// Returns `None` when no line matches. A CRLF line keeps its `\r`.
pub fn replace_first_line(
    content: &str,
    predicate: impl Fn(&str) -> bool,
    replacement: &str,
) -> Option<String> {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    let line = lines.iter_mut().find(|line| predicate(line))?;
    let crlf = line.ends_with('\r');
    *line = replacement.to_string();
    if crlf {
        line.push('\r');
    }
    Some(lines.join("\n"))
}

/// Rewrite the `PROJECT_NAME=` line of a `.env` file
pub fn patch_env_file(content: &str, project_name: &str) -> Option<String> {
    replace_first_line(
        content,
        |line| line.starts_with(ENV_MARKER),
        &format!("{ENV_MARKER}\"{project_name}\""),
    )
}

/// Rewrite the `export const pluginName` line of the script entry point
pub fn patch_entry_point(content: &str, project_name: &str) -> Option<String> {
    replace_first_line(
        content,
        |line| line.starts_with(ENTRY_MARKER),
        &format!("{ENTRY_MARKER} = '{project_name}';"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_env_file_replaces_only_first_project_name_line() {
        let content = "MC_PATH=/games\nPROJECT_NAME=\"starter\"\nPROJECT_NAME=dup\n";

        assert_eq!(
            patch_env_file(content, "demo").as_deref(),
            Some("MC_PATH=/games\nPROJECT_NAME=\"demo\"\nPROJECT_NAME=dup\n")
        );
    }

    #[test]
    fn patch_entry_point_replaces_whole_line() {
        let content = "import { world } from '@minecraft/server';\r\nexport const pluginName = 'starter'; // keep?\r\n";

        assert_eq!(
            patch_entry_point(content, "demo").as_deref(),
            Some("import { world } from '@minecraft/server';\r\nexport const pluginName = 'demo';\r\n")
        );
    }

    #[test]
    fn miss_returns_none() {
        assert_eq!(patch_env_file("OTHER=1\n  PROJECT_NAME=x", "demo"), None);
        assert_eq!(patch_entry_point("", "demo"), None);
    }
}
