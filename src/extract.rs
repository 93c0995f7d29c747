//! Capability entry extraction.
//!
//! Walks the sections of a [`DocumentTree`] in order and turns every section
//! naming a known category into one [`CapabilityEntry`] per documented
//! technique. Sections that do not resolve to a category are skipped, and
//! the rest of the document is still extracted.

use serde_yaml::Value;

use crate::document::{DocumentTree, Section};
use crate::error::ParseError;
use crate::models::{CapabilityEntry, Category, ParsedDocument};

/// Parse raw document text and extract every entry.
pub fn parse_document(binary: &str, text: &str) -> Result<ParsedDocument, ParseError> {
    let tree = DocumentTree::parse(text)?;
    Ok(extract(binary, &tree))
}

/// Extract every entry from an already parsed tree.
pub fn extract(binary: &str, tree: &DocumentTree) -> ParsedDocument {
    let mut entries = Vec::new();

    for section in tree.sections() {
        let Some(category) = Category::resolve(section.name) else {
            tracing::debug!(binary, section = section.name, "skipping unrecognized section");
            continue;
        };
        for item in section_items(&section) {
            if let Some((description, template)) = entry_fields(item) {
                entries.push(CapabilityEntry {
                    category,
                    description,
                    template,
                    order: entries.len(),
                });
            }
        }
    }

    tracing::debug!(binary, count = entries.len(), "extracted entries");

    ParsedDocument {
        binary: binary.to_string(),
        description: tree.description().map(str::to_string),
        entries,
    }
}

fn section_items<'a>(section: &Section<'a>) -> Vec<&'a Value> {
    match section.body {
        Value::Sequence(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn entry_fields(item: &Value) -> Option<(String, String)> {
    match item {
        Value::Mapping(map) => {
            let description = map.get("description").and_then(text_of).unwrap_or_default();
            let template = map.get("code").and_then(text_of).unwrap_or_default();
            Some((description, template))
        }
        Value::String(code) => Some((String::new(), code.trim().to_string())),
        _ => None,
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
