//! Structure parsing for knowledge base documents.
//!
//! A document is markdown with a YAML front matter block:
//!
//! ```text
//! ---
//! description: Optional prose about the binary.
//! functions:
//!   shell:
//!     - code: find . -exec /bin/sh \; -quit
//!   sudo:
//!     - description: Optional prose.
//!       code: sudo find . -exec /bin/sh \; -quit
//! ---
//! ```
//!
//! This module only turns text into a navigable tree. Deciding which sections
//! are capabilities is the job of [`crate::extract`].

use serde_yaml::{Mapping, Value};

use crate::error::ParseError;

/// A named section of the document, in source order.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub name: &'a str,
    pub body: &'a Value,
}

/// Parsed front matter of one document.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    root: Mapping,
}

impl DocumentTree {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (front, _body) = split_front_matter(text);
        let front = front.ok_or(ParseError::MissingFrontMatter)?;

        let root = match serde_yaml::from_str::<Value>(front)? {
            Value::Mapping(map) => map,
            _ => return Err(ParseError::NotAMapping),
        };

        match root.get("functions") {
            Some(Value::Mapping(_)) => Ok(Self { root }),
            _ => Err(ParseError::MissingFunctions),
        }
    }

    /// Binary-level description, if the header carries one.
    pub fn description(&self) -> Option<&str> {
        self.root
            .get("description")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Top-level capability sections in document order. Non-string keys are skipped.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let Some(Value::Mapping(functions)) = self.root.get("functions") else {
            return Vec::new();
        };
        functions
            .iter()
            .filter_map(|(key, body)| key.as_str().map(|name| Section { name, body }))
            .collect()
    }
}

/// Split a document into its front matter and the remaining body.
///
/// Returns `None` for the front matter when the text does not open with a
/// `---` line or the block is never closed.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return (None, text);
    };

    let mut offset = 0usize;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(front), body);
        }
        offset += line.len();
    }

    (None, text)
}
