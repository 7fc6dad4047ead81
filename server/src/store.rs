//! In-memory document storage.

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

/// Current full text of every open document, keyed by URI.
///
/// Writes replace the whole text; concurrent writes to the same URI are
/// last-writer-wins. Callers that need ordering must serialize per URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, String>,
}

impl DocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Insert or overwrite the text for `uri`.
    pub fn put(&self, uri: Url, text: String) {
        if let Some(previous) = self.documents.insert(uri, text) {
            tracing::trace!("Replaced {} bytes of document text", previous.len());
        }
    }

    /// Current text for `uri`, if the document is known.
    pub fn get(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|entry| entry.value().clone())
    }

    /// Run `f` against the stored text without cloning it.
    pub fn with_text<R>(&self, uri: &Url, f: impl FnOnce(&str) -> R) -> Option<R> {
        self.documents.get(uri).map(|entry| f(entry.value()))
    }

    /// Evict `uri`, returning its last text.
    pub fn remove(&self, uri: &Url) -> Option<String> {
        self.documents.remove(uri).map(|(_, text)| text)
    }

    pub fn contains(&self, uri: &Url) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
