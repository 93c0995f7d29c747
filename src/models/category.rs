use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::LookupError;

/// An abuse technique class documented by the knowledge base.
///
/// Each category has a short selector code typed on the command line
/// (`nbind`) and a canonical label used inside documents
/// (`non-interactive-bind-shell`). The mapping is fixed: adding a category
/// means adding a variant here, and every `match` below must be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Shell,
    Command,
    ReverseShell,
    NonInteractiveReverseShell,
    BindShell,
    NonInteractiveBindShell,
    FileUpload,
    FileDownload,
    FileWrite,
    FileRead,
    LibraryLoad,
    Suid,
    Sudo,
    Capabilities,
    LimitedSuid,
}

impl Category {
    /// Every category, in the order the command line lists them.
    pub const ALL: [Category; 15] = [
        Self::Shell,
        Self::Command,
        Self::ReverseShell,
        Self::NonInteractiveReverseShell,
        Self::BindShell,
        Self::NonInteractiveBindShell,
        Self::FileUpload,
        Self::FileDownload,
        Self::FileWrite,
        Self::FileRead,
        Self::LibraryLoad,
        Self::Suid,
        Self::Sudo,
        Self::Capabilities,
        Self::LimitedSuid,
    ];

    /// Short selector code, as typed by the user.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Command => "cmd",
            Self::ReverseShell => "rev",
            Self::NonInteractiveReverseShell => "nrev",
            Self::BindShell => "bind",
            Self::NonInteractiveBindShell => "nbind",
            Self::FileUpload => "upload",
            Self::FileDownload => "download",
            Self::FileWrite => "write",
            Self::FileRead => "read",
            Self::LibraryLoad => "load",
            Self::Suid => "suid",
            Self::Sudo => "sudo",
            Self::Capabilities => "cap",
            Self::LimitedSuid => "lsuid",
        }
    }

    /// Canonical label, as written in knowledge base documents.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Command => "command",
            Self::ReverseShell => "reverse-shell",
            Self::NonInteractiveReverseShell => "non-interactive-reverse-shell",
            Self::BindShell => "bind-shell",
            Self::NonInteractiveBindShell => "non-interactive-bind-shell",
            Self::FileUpload => "file-upload",
            Self::FileDownload => "file-download",
            Self::FileWrite => "file-write",
            Self::FileRead => "file-read",
            Self::LibraryLoad => "library-load",
            Self::Suid => "suid",
            Self::Sudo => "sudo",
            Self::Capabilities => "capabilities",
            Self::LimitedSuid => "limited-suid",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Resolve a section name from a document: canonical label first, then short code.
    pub fn resolve(name: &str) -> Option<Self> {
        Self::from_label(name).or_else(|| Self::from_code(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Which categories a lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Every category present in the document.
    All,
    Specific(Category),
}

impl Selector {
    /// The only accepted spelling of the match-everything selector.
    pub const ALL_CODE: &'static str = "all";

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Specific(wanted) => *wanted == category,
        }
    }
}

impl FromStr for Selector {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_CODE {
            return Ok(Self::All);
        }
        Category::from_code(s)
            .map(Self::Specific)
            .ok_or_else(|| LookupError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_CODE),
            Self::Specific(category) => f.write_str(category.label()),
        }
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_and_labels_are_unique() {
        let codes: HashSet<_> = Category::ALL.iter().map(|c| c.code()).collect();
        let labels: HashSet<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(codes.len(), Category::ALL.len());
        assert_eq!(labels.len(), Category::ALL.len());
    }

    #[test]
    fn test_code_round_trips_through_registry() {
        for category in Category::ALL {
            let label = category.label();
            assert!(!label.is_empty());
            assert_eq!(label, category.label());
            assert_eq!(Category::from_code(category.code()), Some(category));
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(Category::from_code("nbind").map(|c| c.label()), Some("non-interactive-bind-shell"));
        assert_eq!(Category::from_code("rev").map(|c| c.label()), Some("reverse-shell"));
        assert_eq!(Category::from_code("cap").map(|c| c.label()), Some("capabilities"));
        assert_eq!(Category::from_code("cmd").map(|c| c.label()), Some("command"));
    }

    #[test]
    fn test_resolve_prefers_label_then_code() {
        assert_eq!(Category::resolve("file-read"), Some(Category::FileRead));
        assert_eq!(Category::resolve("read"), Some(Category::FileRead));
        assert_eq!(Category::resolve("File-Read"), None);
        assert_eq!(Category::resolve("description"), None);
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("all".parse::<Selector>().ok(), Some(Selector::All));
        assert_eq!(
            "sudo".parse::<Selector>().ok(),
            Some(Selector::Specific(Category::Sudo))
        );
        assert!(matches!(
            "All".parse::<Selector>(),
            Err(LookupError::UnknownCategory(s)) if s == "All"
        ));
        assert!(matches!(
            "frobnicate".parse::<Selector>(),
            Err(LookupError::UnknownCategory(_))
        ));
        // labels are not selectors
        assert!("file-read".parse::<Selector>().is_err());
    }

    #[test]
    fn test_selector_matches() {
        assert!(Selector::All.matches(Category::Capabilities));
        assert!(Selector::Specific(Category::Sudo).matches(Category::Sudo));
        assert!(!Selector::Specific(Category::Sudo).matches(Category::Suid));
    }
}
