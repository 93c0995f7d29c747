//! Lookup orchestration: binary name + selector in, ordered entries out.

use crate::error::LookupError;
use crate::extract;
use crate::mirror::DocumentSource;
use crate::models::{LookupResult, ParsedDocument, Selector};

pub struct Lookup<S> {
    source: S,
}

impl<S: DocumentSource> Lookup<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look up `binary` for the category named by `selector`.
    ///
    /// The selector is resolved before the source is consulted, so an unknown
    /// selector fails the same way whether or not a mirror exists.
    pub fn lookup(&self, binary: &str, selector: &str) -> Result<LookupResult, LookupError> {
        let selector: Selector = selector.parse()?;
        self.lookup_selector(binary, selector)
    }

    pub fn lookup_selector(
        &self,
        binary: &str,
        selector: Selector,
    ) -> Result<LookupResult, LookupError> {
        let document = self.lookup_document(binary)?;
        let entries = document.select(selector);

        Ok(LookupResult {
            binary: document.binary,
            description: document.description,
            selector,
            entries,
        })
    }

    /// Every entry for `binary`, with binary-level metadata.
    pub fn lookup_document(&self, binary: &str) -> Result<ParsedDocument, LookupError> {
        if !self.source.exists() {
            return Err(LookupError::MirrorMissing);
        }

        let text = self
            .source
            .read_document(binary)?
            .ok_or_else(|| LookupError::BinaryNotFound(binary.to_string()))?;

        extract::parse_document(binary, &text).map_err(|source| LookupError::Parse {
            binary: binary.to_string(),
            source,
        })
    }
}
