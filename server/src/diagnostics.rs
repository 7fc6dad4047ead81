//! Commit message linting.

use crate::catalog::PrefixCatalog;
use crate::grammar::CommitGrammar;
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

/// Source tag attached to every diagnostic produced here.
pub const LINT_SOURCE: &str = "cc-lint";

/// Message reported when the header is not a conventional commit.
pub const MISSING_TYPE_MESSAGE: &str =
    "First line should start with the type of the commit in a conventional commit. (e.g. feat, fix, ...)";

/// Lines of `text`, split on `\n` with any trailing `\r` removed.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// The first line that is neither empty nor a `#` comment.
pub fn first_meaningful_line(text: &str) -> Option<&str> {
    lines(text).find(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Validates commit messages against the conventional commit grammar.
#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    grammar: CommitGrammar,
}

impl DiagnosticEngine {
    pub fn new(catalog: &PrefixCatalog) -> Self {
        Self {
            grammar: CommitGrammar::from_catalog(catalog),
        }
    }

    /// Lint a whole document. Yields at most one diagnostic.
    pub fn analyze(&self, text: &str) -> Vec<Diagnostic> {
        let Some(header) = first_meaningful_line(text) else {
            tracing::debug!("No meaningful line to lint");
            return Vec::new();
        };

        match self.grammar.parse(header) {
            Some(parsed) => {
                tracing::debug!(
                    kind = parsed.kind,
                    scope = ?parsed.scope,
                    breaking = parsed.breaking,
                    description = parsed.description,
                    "Commit header accepted"
                );
                Vec::new()
            }
            None => {
                tracing::debug!("Commit header rejected: {:?}", header);
                vec![missing_type_diagnostic()]
            }
        }
    }
}

/// The header violation is always reported at the start of the document,
/// not at the offending line.
fn missing_type_diagnostic() -> Diagnostic {
    Diagnostic {
        range: line_range(0, 0, 0),
        severity: Some(DiagnosticSeverity::ERROR),
        code: None,
        code_description: None,
        source: Some(LINT_SOURCE.to_string()),
        message: MISSING_TYPE_MESSAGE.to_string(),
        related_information: None,
        tags: None,
        data: None,
    }
}

/// A range on a single line.
pub fn line_range(line: u32, start: u32, end: u32) -> Range {
    Range {
        start: Position {
            line,
            character: start,
        },
        end: Position {
            line,
            character: end,
        },
    }
}
