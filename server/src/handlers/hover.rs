//! Hover documentation for commit type keywords.

use crate::catalog::PrefixCatalog;
use crate::diagnostics::lines;
use crate::error::{LspError, LspResult};
use crate::store::DocumentStore;
use crate::word::{char_index_from_utf16, word_at};
use std::sync::Arc;
use tower_lsp::lsp_types::{Hover, HoverContents, MarkedString, Position, Url};

/// Hover text when the token under the cursor is not a known commit type.
pub const NO_DOCUMENTATION: &str = "No documentation available";

/// Resolves the token under the cursor and looks it up in the catalog.
#[derive(Debug, Clone)]
pub struct HoverProvider {
    catalog: Arc<PrefixCatalog>,
}

impl HoverProvider {
    pub fn new(catalog: Arc<PrefixCatalog>) -> Self {
        Self { catalog }
    }

    /// Hover for `position` in the stored document `uri`.
    ///
    /// Never fails: unknown documents, positions outside the text and
    /// catalog misses all produce the placeholder.
    pub fn hover(&self, store: &DocumentStore, uri: &Url, position: Position) -> Hover {
        let contents = match self.documentation_at(store, uri, position) {
            Ok(Some(doc)) => doc.to_string(),
            Ok(None) => NO_DOCUMENTATION.to_string(),
            Err(e) => {
                tracing::debug!("hover: {}", e);
                NO_DOCUMENTATION.to_string()
            }
        };

        Hover {
            contents: HoverContents::Scalar(MarkedString::String(contents)),
            range: None,
        }
    }

    /// Catalog documentation for the token under `position`, if any.
    pub fn documentation_at(
        &self,
        store: &DocumentStore,
        uri: &Url,
        position: Position,
    ) -> LspResult<Option<&str>> {
        let word = store
            .with_text(uri, |text| token_at(text, position).map(str::to_string))
            .ok_or_else(|| LspError::DocumentNotFound(uri.clone()))??;

        tracing::debug!("hover: token {:?} at {}:{}", word, position.line, position.character);
        Ok(self.catalog.lookup(&word))
    }
}

/// The token at an LSP position in `text`.
fn token_at(text: &str, position: Position) -> LspResult<&str> {
    let line = lines(text)
        .nth(position.line as usize)
        .ok_or(LspError::InvalidPosition {
            line: position.line,
            character: position.character,
        })?;
    let character = char_index_from_utf16(line, position.character);
    Ok(word_at(line, character))
}
