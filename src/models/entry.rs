use serde::Serialize;

use super::{Category, Selector};

/// One documented abuse technique for one binary.
///
/// Entries are built from a single document and never mutated afterwards.
/// `template` is the literal command text; it is displayed, never executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityEntry {
    pub category: Category,
    /// Explanatory prose. Empty when the document gives none.
    pub description: String,
    /// Command or code fragment demonstrating the technique. Empty for narrative-only entries.
    pub template: String,
    /// Position within the source document.
    pub order: usize,
}

/// All entries extracted from one binary's document, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDocument {
    pub binary: String,
    /// Binary-level prose from the document header, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub entries: Vec<CapabilityEntry>,
}

impl ParsedDocument {
    /// Entries matching `selector`, preserving document order.
    pub fn select(&self, selector: Selector) -> Vec<CapabilityEntry> {
        self.entries
            .iter()
            .filter(|e| selector.matches(e.category))
            .cloned()
            .collect()
    }
}

/// The answer to one lookup.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub binary: String,
    /// Binary-level prose from the document header, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub selector: Selector,
    pub entries: Vec<CapabilityEntry>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
