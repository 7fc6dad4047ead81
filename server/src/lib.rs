//! Conventional Commit LSP Server Library
//!
//! This crate implements a Language Server Protocol (LSP) server that lints
//! commit messages against the conventional commit format and offers hover
//! documentation and completion for commit types.

pub mod backend;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod handlers;
pub mod state;
pub mod store;
pub mod word;

pub use backend::CommitLintBackend;
pub use catalog::PrefixCatalog;
pub use diagnostics::DiagnosticEngine;
pub use error::LspError;
pub use state::AnalysisState;
