//! Conventional commit header grammar.
//!
//! A header is `<type>[(<scope>)][!]:<whitespace>...` where `<type>` is one
//! of the catalog keywords. The grammar is described as data (ordered
//! keyword alternatives plus a fixed suffix) and matched directly, without
//! building a pattern string.

use crate::catalog::PrefixCatalog;

/// The parts of a matched commit header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader<'a> {
    pub kind: &'a str,
    pub scope: Option<&'a str>,
    pub breaking: bool,
    /// Everything after the `:` and the whitespace run that follows it.
    pub description: &'a str,
}

/// Ordered alternation of literal keywords followed by the header suffix.
#[derive(Debug, Clone)]
pub struct CommitGrammar {
    keywords: Vec<String>,
}

impl CommitGrammar {
    pub fn new<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keywords: keywords.into_iter().map(str::to_string).collect(),
        }
    }

    /// Grammar accepting exactly the catalog's keywords.
    pub fn from_catalog(catalog: &PrefixCatalog) -> Self {
        Self::new(catalog.keywords())
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Whether `line` starts with a valid header. The match need not
    /// consume the whole line.
    pub fn matches(&self, line: &str) -> bool {
        self.parse(line).is_some()
    }

    /// Match `line` against the grammar, trying keywords in order.
    pub fn parse<'a>(&self, line: &'a str) -> Option<CommitHeader<'a>> {
        self.keywords.iter().find_map(|keyword| {
            let rest = line.strip_prefix(keyword.as_str())?;
            let kind = &line[..keyword.len()];
            parse_suffix(kind, rest)
        })
    }
}

/// `[(<scope>)][!]:<whitespace>+` after the type keyword.
fn parse_suffix<'a>(kind: &'a str, rest: &'a str) -> Option<CommitHeader<'a>> {
    if let Some((breaking, description)) = parse_colon(rest) {
        return Some(CommitHeader {
            kind,
            scope: None,
            breaking,
            description,
        });
    }

    // The scope may itself contain `)`, so every closing paren is a
    // candidate end; the first one followed by a valid tail wins.
    let inner = rest.strip_prefix('(')?;
    inner
        .match_indices(')')
        .filter(|(idx, _)| *idx > 0)
        .find_map(|(idx, _)| {
            let (breaking, description) = parse_colon(&inner[idx + 1..])?;
            Some(CommitHeader {
                kind,
                scope: Some(&inner[..idx]),
                breaking,
                description,
            })
        })
}

/// `[!]:<whitespace>+`, returning the breaking flag and the description.
fn parse_colon(rest: &str) -> Option<(bool, &str)> {
    let (breaking, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let rest = rest.strip_prefix(':')?;
    let description = rest.trim_start_matches(is_header_space);
    if description.len() == rest.len() {
        return None;
    }
    Some((breaking, description))
}

fn is_header_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}
