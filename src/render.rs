//! Plain text and JSON rendering of lookup results.

use crate::models::{CapabilityEntry, LookupResult, Selector};

const DESCRIPTION_INDENT: &str = "  ";
const TEMPLATE_INDENT: &str = "    ";

/// Message shown when a valid lookup finds nothing.
pub fn empty_message(result: &LookupResult) -> String {
    let what = match result.selector {
        Selector::All => "capability".to_string(),
        Selector::Specific(category) => category.label().to_string(),
    };
    format!("No {} entries documented for {}", what, result.binary)
}

/// Render a result for the terminal.
///
/// Example output:
/// ```text
/// find (sudo)
/// Walk a file hierarchy.
///
/// [sudo]
///     sudo find . -exec /bin/sh \; -quit
///
/// [sudo]
///   Spawn a root shell through -fprintf.
///     sudo find / -fprintf /tmp/x DATA -quit
/// ```
pub fn render_text(result: &LookupResult) -> String {
    if result.is_empty() {
        let mut output = empty_message(result);
        output.push('\n');
        return output;
    }

    let mut output = format!("{} ({})\n", result.binary, result.selector);
    if let Some(description) = &result.description {
        push_indented(&mut output, description, "");
    }
    for entry in &result.entries {
        output.push('\n');
        render_entry(&mut output, entry);
    }
    output
}

fn render_entry(output: &mut String, entry: &CapabilityEntry) {
    output.push('[');
    output.push_str(entry.category.label());
    output.push_str("]\n");

    push_indented(output, &entry.description, DESCRIPTION_INDENT);
    push_indented(output, &entry.template, TEMPLATE_INDENT);
}

fn push_indented(output: &mut String, text: &str, indent: &str) {
    if text.is_empty() {
        return;
    }
    for line in text.lines() {
        if !line.is_empty() {
            output.push_str(indent);
        }
        output.push_str(line);
        output.push('\n');
    }
}

/// Render a result as pretty-printed JSON.
pub fn render_json(result: &LookupResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn make_entry(category: Category, description: &str, template: &str, order: usize) -> CapabilityEntry {
        CapabilityEntry {
            category,
            description: description.to_string(),
            template: template.to_string(),
            order,
        }
    }

    fn make_result(selector: Selector, entries: Vec<CapabilityEntry>) -> LookupResult {
        LookupResult {
            binary: "find".to_string(),
            description: None,
            selector,
            entries,
        }
    }

    #[test]
    fn test_empty_specific() {
        let result = make_result(Selector::Specific(Category::Capabilities), vec![]);
        assert_eq!(
            render_text(&result),
            "No capabilities entries documented for find\n"
        );
    }

    #[test]
    fn test_empty_all() {
        let result = make_result(Selector::All, vec![]);
        assert_eq!(
            render_text(&result),
            "No capability entries documented for find\n"
        );
    }

    #[test]
    fn test_single_entry() {
        let result = make_result(
            Selector::Specific(Category::Shell),
            vec![make_entry(Category::Shell, "", "find . -exec /bin/sh \\; -quit", 0)],
        );
        assert_eq!(
            render_text(&result),
            "find (shell)\n\n[shell]\n    find . -exec /bin/sh \\; -quit\n"
        );
    }

    #[test]
    fn test_description_and_multiline_template() {
        let result = make_result(
            Selector::All,
            vec![
                make_entry(Category::Sudo, "Run as root.", "sudo find . -exec /bin/sh \\; -quit", 0),
                make_entry(Category::FileRead, "", "LFILE=file_to_read\n\nfind \"$LFILE\"", 1),
            ],
        );
        let expected = "find (all)\n\n[sudo]\n  Run as root.\n    sudo find . -exec /bin/sh \\; -quit\n\n[file-read]\n    LFILE=file_to_read\n\n    find \"$LFILE\"\n";
        assert_eq!(render_text(&result), expected);
    }

    #[test]
    fn test_binary_description_follows_header() {
        let mut result = make_result(
            Selector::Specific(Category::Shell),
            vec![make_entry(Category::Shell, "", "find . -exec /bin/sh \\; -quit", 0)],
        );
        result.description = Some("Walk a file hierarchy.".to_string());
        assert_eq!(
            render_text(&result),
            "find (shell)\nWalk a file hierarchy.\n\n[shell]\n    find . -exec /bin/sh \\; -quit\n"
        );

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(json["description"], "Walk a file hierarchy.");
    }

    #[test]
    fn test_json_omits_missing_description() {
        let result = make_result(Selector::All, vec![]);
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_json_uses_labels() {
        let result = make_result(
            Selector::Specific(Category::NonInteractiveBindShell),
            vec![make_entry(Category::NonInteractiveBindShell, "", "nc -l -p 12345 -e /bin/sh", 0)],
        );
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(json["selector"], "non-interactive-bind-shell");
        assert_eq!(json["entries"][0]["category"], "non-interactive-bind-shell");
        assert_eq!(json["entries"][0]["template"], "nc -l -p 12345 -e /bin/sh");
        assert_eq!(json["entries"][0]["order"], 0);
    }
}
