//! cc-lsp Server Entry Point
//!
//! Serves the Language Server Protocol over stdio for commit message
//! buffers.

use cc_lsp::{CommitLintBackend, PrefixCatalog};
use clap::Parser;
use std::sync::Arc;
use tower_lsp::{LspService, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cc-lsp")]
#[command(about = "Conventional commit language server")]
#[command(version)]
struct Args {
    /// Serve over stdio (the only transport; accepted for editor compatibility)
    #[arg(long)]
    stdio: bool,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging. Stdout carries the protocol.
    let log_filter = if args.verbose {
        "cc_lsp=debug"
    } else {
        "cc_lsp=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !args.stdio {
        tracing::debug!("No transport flag given, defaulting to stdio");
    }

    let catalog = match PrefixCatalog::conventional() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Invalid commit type catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting cc-lsp with commit types: {}",
        catalog.keywords().collect::<Vec<_>>().join(", ")
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| CommitLintBackend::new(client, Arc::clone(&catalog)));

    Server::new(stdin, stdout, socket).serve(service).await;
}
