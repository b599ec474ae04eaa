//! Terminal alphabet and the symbol-to-terminal projection
//!
//! The parser never looks at lexemes; it consumes `Terminal` tags. This
//! module projects the tokenizer's symbol sequence into that alphabet:
//! keywords map through an exact-text lookup, identifiers collapse to a
//! single `Identifier` terminal, and every other symbol kind is rejected
//! because the bundled grammar has no use for it.

use crate::lexer::{LexicalSymbol, SymbolKind};
use serde::Serialize;
use std::fmt;

/// The parser's input alphabet.
///
/// `End` is the end-of-input marker. The mapper never emits it; the
/// automaton seeds it at the bottom of its stack and matches it against
/// the exhausted-input condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Terminal {
    AlterTable,
    DropColumn,
    Identifier,
    End,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terminal::AlterTable => "ALTER TABLE",
            Terminal::DropColumn => "DROP COLUMN",
            Terminal::Identifier => "identifier",
            Terminal::End => "end of input",
        };
        write!(f, "{}", name)
    }
}

/// Errors produced while mapping symbols to terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A keyword symbol whose text has no terminal assigned.
    UnmappedKeyword(String),
    /// A symbol kind the grammar does not use (number, operator, string).
    UnsupportedSymbolKind(SymbolKind),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::UnmappedKeyword(text) => {
                write!(f, "keyword {:?} has no terminal mapping", text)
            }
            MapError::UnsupportedSymbolKind(kind) => {
                write!(f, "symbol kind '{}' is not part of the grammar", kind)
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Project a symbol sequence into the terminal alphabet, order preserved.
///
/// Keyword lookup is exact and case-sensitive on the recognized literal;
/// identifier lexemes are dropped here since the automaton only ever
/// inspects terminal kinds. Rejects rather than silently skipping symbols
/// the grammar cannot consume.
pub fn map_terminals(symbols: &[LexicalSymbol]) -> Result<Vec<Terminal>, MapError> {
    symbols
        .iter()
        .map(|symbol| match symbol.kind {
            SymbolKind::Keyword => match symbol.text.as_str() {
                "ALTER TABLE" => Ok(Terminal::AlterTable),
                "DROP COLUMN" => Ok(Terminal::DropColumn),
                other => Err(MapError::UnmappedKeyword(other.to_string())),
            },
            SymbolKind::Identifier => Ok(Terminal::Identifier),
            other => Err(MapError::UnsupportedSymbolKind(other)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_statement_maps_to_terminal_sequence() {
        let symbols = tokenize("ALTER TABLE Table1 DROP COLUMN Email").unwrap();
        let terminals = map_terminals(&symbols).unwrap();
        assert_eq!(
            terminals,
            vec![
                Terminal::AlterTable,
                Terminal::Identifier,
                Terminal::DropColumn,
                Terminal::Identifier,
            ]
        );
    }

    #[test]
    fn test_identifier_lexeme_is_not_retained() {
        let symbols = tokenize("Foo Bar").unwrap();
        let terminals = map_terminals(&symbols).unwrap();
        assert_eq!(terminals, vec![Terminal::Identifier, Terminal::Identifier]);
    }

    #[test]
    fn test_unsupported_kind_is_rejected_not_dropped() {
        let symbols = tokenize("ALTER TABLE 1Table").unwrap();
        let err = map_terminals(&symbols).unwrap_err();
        assert_eq!(err, MapError::UnsupportedSymbolKind(SymbolKind::Number));
    }

    #[test]
    fn test_unmapped_keyword_is_rejected() {
        use crate::lexer::LexicalSymbol;
        let symbols = vec![LexicalSymbol::new(SymbolKind::Keyword, "CREATE TABLE", 0)];
        let err = map_terminals(&symbols).unwrap_err();
        assert_eq!(err, MapError::UnmappedKeyword("CREATE TABLE".to_string()));
    }

    #[test]
    fn test_empty_sequence_maps_to_empty_word() {
        assert!(map_terminals(&[]).unwrap().is_empty());
    }
}
