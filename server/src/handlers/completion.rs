//! Commit type completion.

use crate::catalog::PrefixCatalog;
use std::sync::Arc;
use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Documentation};

/// Offers every catalog keyword, independent of cursor context.
#[derive(Debug, Clone)]
pub struct CompletionProvider {
    catalog: Arc<PrefixCatalog>,
}

impl CompletionProvider {
    pub fn new(catalog: Arc<PrefixCatalog>) -> Self {
        Self { catalog }
    }

    /// One item per catalog entry, in catalog order.
    pub fn items(&self) -> Vec<CompletionItem> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| CompletionItem {
                label: entry.keyword.clone(),
                kind: Some(CompletionItemKind::KEYWORD),
                detail: Some(entry.documentation.clone()),
                documentation: Some(Documentation::String(entry.documentation.clone())),
                ..Default::default()
            })
            .collect()
    }
}
