//! Error types for the commit lint server.

use thiserror::Error;
use tower_lsp::lsp_types::Url;

/// Errors that can occur in the LSP server.
#[derive(Debug, Error)]
pub enum LspError {
    /// The prefix catalog is internally inconsistent. Raised at startup only.
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Document not open: {0}")]
    DocumentNotFound(Url),

    #[error("Invalid position {line}:{character}")]
    InvalidPosition { line: u32, character: u32 },
}

impl From<LspError> for tower_lsp::jsonrpc::Error {
    fn from(err: LspError) -> Self {
        let code = match &err {
            LspError::DocumentNotFound(_) => tower_lsp::jsonrpc::ErrorCode::InvalidParams,
            LspError::InvalidPosition { .. } => tower_lsp::jsonrpc::ErrorCode::InvalidParams,
            LspError::Catalog(_) => tower_lsp::jsonrpc::ErrorCode::InternalError,
        };

        tower_lsp::jsonrpc::Error {
            code,
            message: err.to_string().into(),
            data: None,
        }
    }
}

/// Result type alias for LSP operations.
pub type LspResult<T> = Result<T, LspError>;
