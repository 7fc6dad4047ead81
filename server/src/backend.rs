//! LSP Backend Implementation
//!
//! This module wires the commit analysis state into the Language Server
//! Protocol.

use crate::catalog::PrefixCatalog;
use crate::state::AnalysisState;
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

/// Commit message language server backend.
pub struct CommitLintBackend {
    /// LSP client for sending notifications.
    pub client: Client,

    /// Open documents and the analyses over them.
    pub state: Arc<AnalysisState>,
}

impl CommitLintBackend {
    /// Create a new backend sharing `catalog`.
    pub fn new(client: Client, catalog: Arc<PrefixCatalog>) -> Self {
        Self {
            client,
            state: Arc::new(AnalysisState::new(catalog)),
        }
    }

    async fn publish(&self, uri: Url, diagnostics: Vec<Diagnostic>, version: Option<i32>) {
        tracing::info!("Publishing {} diagnostic(s) for {}", diagnostics.len(), uri);
        self.client
            .publish_diagnostics(uri, diagnostics, version)
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for CommitLintBackend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(info) = &params.client_info {
            tracing::info!(
                "Initializing for client {} {}",
                info.name,
                info.version.as_deref().unwrap_or("")
            );
        } else {
            tracing::info!("Initializing commit lint server");
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        ..Default::default()
                    },
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions::default()),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(
                MessageType::INFO,
                format!(
                    "cc-lsp initialized with {} commit types",
                    self.state.catalog().len()
                ),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down cc-lsp");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        tracing::info!("did_open called for: {}", uri);

        let diagnostics = self
            .state
            .open_document(uri.clone(), params.text_document.text);
        self.publish(uri, diagnostics, Some(version)).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: changes apply in order, so the last one is the document.
        let Some(change) = params.content_changes.into_iter().last() else {
            tracing::warn!("did_change without content for {}", uri);
            return;
        };
        if change.range.is_some() {
            tracing::warn!("Ignoring incremental change for {}", uri);
            return;
        }

        let diagnostics = self.state.update_document(uri.clone(), change.text);
        self.publish(uri, diagnostics, Some(version)).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        if self.state.close_document(&uri) {
            tracing::info!("Closed {}", uri);
        }
        self.publish(uri, Vec::new(), None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        Ok(Some(self.state.hover(uri, position)))
    }

    async fn completion(&self, _: CompletionParams) -> Result<Option<CompletionResponse>> {
        Ok(Some(CompletionResponse::Array(self.state.completion())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::LspService;

    fn create_test_backend() -> CommitLintBackend {
        let catalog = Arc::new(PrefixCatalog::conventional().expect("Failed to build catalog"));
        let (service, _socket) = {
            let catalog = Arc::clone(&catalog);
            LspService::new(move |client| CommitLintBackend::new(client, Arc::clone(&catalog)))
        };
        let client = service.inner().client.clone();
        CommitLintBackend::new(client, catalog)
    }

    fn uri() -> Url {
        Url::parse("file:///repo/.git/COMMIT_EDITMSG").unwrap()
    }

    fn open_params(text: &str) -> DidOpenTextDocumentParams {
        DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri(),
                language_id: "gitcommit".to_string(),
                version: 1,
                text: text.to_string(),
            },
        }
    }

    fn hover_params(line: u32, character: u32) -> HoverParams {
        HoverParams {
            text_document_position_params: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri: uri() },
                position: Position { line, character },
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
        }
    }

    fn hover_value(hover: Option<Hover>) -> String {
        match hover.map(|h| h.contents) {
            Some(HoverContents::Scalar(MarkedString::String(s))) => s,
            other => panic!("unexpected hover {other:?}"),
        }
    }

    #[test]
    fn test_backend_creation() {
        let backend = create_test_backend();
        assert!(backend.state.documents().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_capabilities() {
        let backend = create_test_backend();
        let result = backend
            .initialize(InitializeParams::default())
            .await
            .unwrap();

        assert_eq!(
            result.capabilities.hover_provider,
            Some(HoverProviderCapability::Simple(true))
        );
        assert!(result.capabilities.completion_provider.is_some());
        match result.capabilities.text_document_sync {
            Some(TextDocumentSyncCapability::Options(options)) => {
                assert_eq!(options.open_close, Some(true));
                assert_eq!(options.change, Some(TextDocumentSyncKind::FULL));
            }
            other => panic!("unexpected sync capability {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_did_open_then_hover() {
        let backend = create_test_backend();
        backend.did_open(open_params("fix(core): y")).await;

        assert!(backend.state.documents().contains(&uri()));
        let hover = backend.hover(hover_params(0, 1)).await.unwrap();
        assert_eq!(hover_value(hover), "fix: A bug fix");

        let hover = backend.hover(hover_params(0, 3)).await.unwrap();
        assert_eq!(hover_value(hover), crate::handlers::NO_DOCUMENTATION);
    }

    #[tokio::test]
    async fn test_did_change_replaces_text() {
        let backend = create_test_backend();
        backend.did_open(open_params("fix: y")).await;
        backend
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: uri(),
                    version: 2,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: "style: y".to_string(),
                }],
            })
            .await;

        assert_eq!(
            backend.state.documents().get(&uri()).as_deref(),
            Some("style: y")
        );
    }

    fn change_params(
        version: i32,
        changes: Vec<TextDocumentContentChangeEvent>,
    ) -> DidChangeTextDocumentParams {
        DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier { uri: uri(), version },
            content_changes: changes,
        }
    }

    fn full_change(text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_did_change_batch_keeps_last() {
        let backend = create_test_backend();
        backend.did_open(open_params("fix: y")).await;
        backend
            .did_change(change_params(
                2,
                vec![full_change("bogus"), full_change("docs: final")],
            ))
            .await;

        assert_eq!(
            backend.state.documents().get(&uri()).as_deref(),
            Some("docs: final")
        );
    }

    #[tokio::test]
    async fn test_did_change_ignores_ranged_change() {
        let backend = create_test_backend();
        backend.did_open(open_params("fix: y")).await;
        backend
            .did_change(change_params(
                2,
                vec![TextDocumentContentChangeEvent {
                    range: Some(Range::new(Position::new(0, 0), Position::new(0, 3))),
                    range_length: None,
                    text: "feat".to_string(),
                }],
            ))
            .await;

        assert_eq!(
            backend.state.documents().get(&uri()).as_deref(),
            Some("fix: y")
        );
    }

    #[tokio::test]
    async fn test_did_close_evicts() {
        let backend = create_test_backend();
        backend.did_open(open_params("fix: y")).await;
        backend
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri() },
            })
            .await;

        assert!(backend.state.documents().is_empty());
    }

    #[tokio::test]
    async fn test_completion_returns_catalog() {
        let backend = create_test_backend();
        let params = CompletionParams {
            text_document_position: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri: uri() },
                position: Position::new(0, 0),
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
            context: None,
        };

        match backend.completion(params).await.unwrap() {
            Some(CompletionResponse::Array(items)) => {
                assert_eq!(items.len(), backend.state.catalog().len());
                assert_eq!(items[4].label, "feat");
            }
            other => panic!("unexpected completion {other:?}"),
        }
    }
}
