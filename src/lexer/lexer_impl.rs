//! Implementation of the DDL tokenizer
//!
//! The tokenizer owns no grammar knowledge of its own: it repeatedly asks
//! the pattern table for the first rule matching at the current offset,
//! emits the match as a `LexicalSymbol`, and advances by the matched
//! length. Whitespace matches advance the scan but are not emitted.

use crate::lexer::patterns::{PatternTable, SymbolKind};
use crate::lexer::tokens::LexicalSymbol;
use std::fmt;

/// Errors produced while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No pattern matched at `offset` while unconsumed input remained.
    NoLexicalMatch { offset: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::NoLexicalMatch { offset } => {
                write!(f, "no lexical pattern matches input at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// A pattern-table-driven tokenizer.
///
/// The table is injected so the same driver can serve a different token
/// language; `Tokenizer::default()` uses the bundled DDL rules.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    table: PatternTable,
}

impl Tokenizer {
    pub fn new(table: PatternTable) -> Self {
        Tokenizer { table }
    }

    /// Tokenize an entire source string into lexical symbols.
    ///
    /// The loop terminates because `PatternTable::match_at` only returns
    /// non-empty matches, so `offset` strictly increases every iteration.
    pub fn tokenize(&self, source: &str) -> Result<Vec<LexicalSymbol>, LexError> {
        let mut symbols = Vec::new();
        let mut offset = 0;

        while offset < source.len() {
            let rest = &source[offset..];
            let (kind, text) = self
                .table
                .match_at(rest)
                .ok_or(LexError::NoLexicalMatch { offset })?;

            if kind != SymbolKind::Whitespace {
                symbols.push(LexicalSymbol::new(kind, text, offset));
            }
            offset += text.len();
        }

        Ok(symbols)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(PatternTable::default_table().clone())
    }
}

/// Convenience function to tokenize with the bundled DDL rules.
pub fn tokenize(source: &str) -> Result<Vec<LexicalSymbol>, LexError> {
    Tokenizer::default().tokenize(source)
}
