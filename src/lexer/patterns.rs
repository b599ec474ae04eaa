//! Lexical pattern table for the DDL tokenizer
//!
//! The tokenizer is driven entirely by an ordered list of (kind, pattern)
//! rules. Order matters: rules are tried in declaration order and the first
//! anchored match wins, so the keyword pattern must be declared before the
//! identifier pattern or keywords would tokenize as identifiers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The kinds of lexical symbols the tokenizer can emit.
///
/// Each kind owns exactly one pattern in the pattern table. Whitespace is
/// matched and consumed but never emitted as a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    StringLiteral,
    Whitespace,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Keyword => "keyword",
            SymbolKind::Identifier => "identifier",
            SymbolKind::Number => "number",
            SymbolKind::Operator => "operator",
            SymbolKind::StringLiteral => "string literal",
            SymbolKind::Whitespace => "whitespace",
        };
        write!(f, "{}", name)
    }
}

/// Default lexical rules in priority order.
///
/// Keywords come first so that "ALTER TABLE" never lexes as an identifier;
/// numbers come before identifiers so "1Table" splits into a number followed
/// by an identifier instead of being swallowed whole.
const DEFAULT_PATTERNS: &[(SymbolKind, &str)] = &[
    (SymbolKind::Keyword, r"ALTER TABLE|DROP COLUMN"),
    (SymbolKind::StringLiteral, r"'[^']*'"),
    (SymbolKind::Number, r"[0-9]+"),
    (SymbolKind::Identifier, r"[A-Za-z_][A-Za-z0-9_]*"),
    (SymbolKind::Operator, r"[=<>!+\-*/%,;().]"),
    (SymbolKind::Whitespace, r"\s+"),
];

/// The shared, lazily compiled default pattern table.
static DEFAULT_TABLE: Lazy<PatternTable> = Lazy::new(|| PatternTable::new(DEFAULT_PATTERNS));

/// An ordered list of compiled lexical rules.
///
/// Patterns are compiled anchored (`\A(?:...)`) so matching only ever
/// happens at the current scan position, never as a search further into
/// the input. The table is immutable after construction and can be shared
/// freely across tokenizer invocations.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<(SymbolKind, Regex)>,
}

impl PatternTable {
    /// Compile an ordered rule list into a table.
    ///
    /// Panics if a pattern fails to compile; the rules are static
    /// configuration, so a bad pattern is a programming error rather
    /// than a runtime condition.
    pub fn new(patterns: &[(SymbolKind, &str)]) -> Self {
        let rules = patterns
            .iter()
            .map(|(kind, pattern)| {
                let anchored = format!(r"\A(?:{})", pattern);
                let regex = Regex::new(&anchored)
                    .unwrap_or_else(|e| panic!("invalid lexical pattern {:?}: {}", pattern, e));
                (*kind, regex)
            })
            .collect();
        PatternTable { rules }
    }

    /// The bundled DDL rule set.
    pub fn default_table() -> &'static PatternTable {
        &DEFAULT_TABLE
    }

    /// Try every rule in priority order against the start of `rest`.
    ///
    /// Returns the first rule whose pattern matches a non-empty prefix.
    /// Zero-length matches are skipped when selecting a rule so that a
    /// successful match always advances the scan position.
    pub fn match_at<'t>(&self, rest: &'t str) -> Option<(SymbolKind, &'t str)> {
        for (kind, regex) in &self.rules {
            if let Some(m) = regex.find(rest) {
                if !m.is_empty() {
                    return Some((*kind, m.as_str()));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_beats_identifier() {
        let table = PatternTable::default_table();
        let (kind, text) = table.match_at("ALTER TABLE Table1").unwrap();
        assert_eq!(kind, SymbolKind::Keyword);
        assert_eq!(text, "ALTER TABLE");
    }

    #[test]
    fn test_identifier_when_no_keyword_matches() {
        let table = PatternTable::default_table();
        let (kind, text) = table.match_at("Table1 rest").unwrap();
        assert_eq!(kind, SymbolKind::Identifier);
        assert_eq!(text, "Table1");
    }

    #[test]
    fn test_number_beats_identifier_on_leading_digit() {
        let table = PatternTable::default_table();
        let (kind, text) = table.match_at("1Table").unwrap();
        assert_eq!(kind, SymbolKind::Number);
        assert_eq!(text, "1");
    }

    #[test]
    fn test_match_is_anchored_not_a_search() {
        let table = PatternTable::default_table();
        // '@' matches no rule; the identifier further in must not be found.
        assert_eq!(table.match_at("@Table1"), None);
    }

    #[test]
    fn test_whitespace_matches_full_run() {
        let table = PatternTable::default_table();
        let (kind, text) = table.match_at("  \t x").unwrap();
        assert_eq!(kind, SymbolKind::Whitespace);
        assert_eq!(text, "  \t ");
    }

    #[test]
    fn test_zero_length_match_is_skipped() {
        // A rule that can match empty must not stall rule selection.
        let table = PatternTable::new(&[
            (SymbolKind::Whitespace, r"\s*"),
            (SymbolKind::Identifier, r"[a-z]+"),
        ]);
        let (kind, text) = table.match_at("abc").unwrap();
        assert_eq!(kind, SymbolKind::Identifier);
        assert_eq!(text, "abc");
    }
}
