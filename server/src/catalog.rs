//! Catalog of recognized commit types and their documentation.
//!
//! The catalog is built once at startup and shared read-only (behind an
//! `Arc`) by the diagnostic engine, hover and completion.

use crate::error::{LspError, LspResult};
use std::collections::HashSet;

/// Built-in conventional commit types, in catalog order.
const CONVENTIONAL_TYPES: &[(&str, &str)] = &[
    (
        "build",
        "build: Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)",
    ),
    (
        "chore",
        "chore: Other changes that don't modify source or test files",
    ),
    (
        "ci",
        "ci: Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)",
    ),
    ("docs", "docs: Documentation only changes"),
    ("feat", "feat: A new feature"),
    ("fix", "fix: A bug fix"),
    ("perf", "perf: A code change that improves performance"),
    (
        "refactor",
        "refactor: A code change that neither fixes a bug nor adds a feature",
    ),
    ("revert", "revert: Reverts a previous commit"),
    (
        "style",
        "style: Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
    ),
    (
        "test",
        "test: Adding missing tests or correcting existing tests",
    ),
];

/// A commit type keyword and its documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    pub keyword: String,
    pub documentation: String,
}

/// Ordered, immutable set of recognized commit types.
#[derive(Debug, Clone)]
pub struct PrefixCatalog {
    entries: Vec<PrefixEntry>,
}

impl PrefixCatalog {
    /// Build a catalog from an ordered keyword list and a documentation table.
    ///
    /// Every keyword must be non-empty, unique and documented. A violation is
    /// a programming error in the caller and is reported as
    /// [`LspError::Catalog`] so the server can refuse to start.
    pub fn new(keywords: &[&str], docs: &[(&str, &str)]) -> LspResult<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(keywords.len());

        for &keyword in keywords {
            if keyword.is_empty() {
                return Err(LspError::Catalog("empty commit type keyword".to_string()));
            }
            if !seen.insert(keyword) {
                return Err(LspError::Catalog(format!(
                    "duplicate commit type `{keyword}`"
                )));
            }

            let documentation = docs
                .iter()
                .find(|(k, _)| *k == keyword)
                .map(|(_, doc)| *doc)
                .filter(|doc| !doc.is_empty())
                .ok_or_else(|| {
                    LspError::Catalog(format!("no documentation for commit type `{keyword}`"))
                })?;

            entries.push(PrefixEntry {
                keyword: keyword.to_string(),
                documentation: documentation.to_string(),
            });
        }

        if entries.is_empty() {
            return Err(LspError::Catalog("no commit types configured".to_string()));
        }

        Ok(Self { entries })
    }

    /// The built-in conventional commit catalog.
    pub fn conventional() -> LspResult<Self> {
        let keywords: Vec<&str> = CONVENTIONAL_TYPES.iter().map(|(k, _)| *k).collect();
        Self::new(&keywords, CONVENTIONAL_TYPES)
    }

    /// Documentation for an exact (case-sensitive) keyword.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.keyword == word)
            .map(|entry| entry.documentation.as_str())
    }

    /// Keywords in catalog order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.keyword.as_str())
    }

    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_catalog_order() {
        let catalog = PrefixCatalog::conventional().unwrap();
        let keywords: Vec<&str> = catalog.keywords().collect();
        assert_eq!(
            keywords,
            vec![
                "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                "style", "test"
            ]
        );
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = PrefixCatalog::conventional().unwrap();
        assert_eq!(catalog.lookup("feat"), Some("feat: A new feature"));
        assert_eq!(catalog.lookup("fix"), Some("fix: A bug fix"));
        assert_eq!(catalog.lookup("Feat"), None);
        assert_eq!(catalog.lookup("fea"), None);
        assert_eq!(catalog.lookup(""), None);
    }

    #[test]
    fn test_every_entry_documented_with_its_keyword() {
        let catalog = PrefixCatalog::conventional().unwrap();
        for entry in catalog.entries() {
            assert!(
                entry.documentation.starts_with(&format!("{}:", entry.keyword)),
                "bad docs for {}",
                entry.keyword
            );
        }
    }

    #[test]
    fn test_missing_documentation_fails() {
        let result = PrefixCatalog::new(&["feat", "wip"], &[("feat", "feat: A new feature")]);
        match result {
            Err(LspError::Catalog(msg)) => assert!(msg.contains("wip")),
            other => panic!("Expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_documentation_fails() {
        let result = PrefixCatalog::new(&["feat"], &[("feat", "")]);
        assert!(matches!(result, Err(LspError::Catalog(_))));
    }

    #[test]
    fn test_duplicate_keyword_fails() {
        let docs = [("fix", "fix: A bug fix")];
        let result = PrefixCatalog::new(&["fix", "fix"], &docs);
        assert!(matches!(result, Err(LspError::Catalog(_))));
    }

    #[test]
    fn test_empty_catalog_fails() {
        assert!(PrefixCatalog::new(&[], &[]).is_err());
        assert!(PrefixCatalog::new(&[""], &[("", "x")]).is_err());
    }

    #[test]
    fn test_unused_documentation_is_ignored() {
        let docs = [("fix", "fix: A bug fix"), ("feat", "feat: A new feature")];
        let catalog = PrefixCatalog::new(&["fix"], &docs).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("feat"), None);
    }
}
