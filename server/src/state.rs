//! Document analysis state shared by all requests.

use crate::catalog::PrefixCatalog;
use crate::diagnostics::DiagnosticEngine;
use crate::handlers::{CompletionProvider, HoverProvider};
use crate::store::DocumentStore;
use std::sync::Arc;
use tower_lsp::lsp_types::{CompletionItem, Diagnostic, Hover, Position, Url};

/// Open documents plus the catalog-driven analyses over them.
///
/// Every operation is synchronous and completes without blocking.
#[derive(Debug)]
pub struct AnalysisState {
    catalog: Arc<PrefixCatalog>,
    documents: DocumentStore,
    engine: DiagnosticEngine,
    hover: HoverProvider,
    completion: CompletionProvider,
}

impl AnalysisState {
    pub fn new(catalog: Arc<PrefixCatalog>) -> Self {
        Self {
            engine: DiagnosticEngine::new(&catalog),
            hover: HoverProvider::new(Arc::clone(&catalog)),
            completion: CompletionProvider::new(Arc::clone(&catalog)),
            documents: DocumentStore::new(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &PrefixCatalog {
        &self.catalog
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Record a newly opened document and lint it.
    pub fn open_document(&self, uri: Url, text: String) -> Vec<Diagnostic> {
        self.store_and_analyze(uri, text)
    }

    /// Replace a document's text and lint it again.
    pub fn update_document(&self, uri: Url, text: String) -> Vec<Diagnostic> {
        self.store_and_analyze(uri, text)
    }

    /// Forget a closed document. Returns whether it was open.
    pub fn close_document(&self, uri: &Url) -> bool {
        self.documents.remove(uri).is_some()
    }

    pub fn hover(&self, uri: &Url, position: Position) -> Hover {
        self.hover.hover(&self.documents, uri, position)
    }

    pub fn completion(&self) -> Vec<CompletionItem> {
        self.completion.items()
    }

    fn store_and_analyze(&self, uri: Url, text: String) -> Vec<Diagnostic> {
        let diagnostics = self.engine.analyze(&text);
        tracing::debug!("{}: {} diagnostic(s)", uri, diagnostics.len());
        self.documents.put(uri, text);
        diagnostics
    }
}
