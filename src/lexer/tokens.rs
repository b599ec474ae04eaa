//! Lexical symbol type produced by the tokenizer
//!
//! A `LexicalSymbol` pairs a symbol kind with the exact source text it
//! matched and the byte offset it was matched at. Offsets tile the source:
//! each symbol (including skipped whitespace) begins exactly where the
//! previous match ended.

use crate::lexer::patterns::SymbolKind;
use serde::Serialize;
use std::fmt;

/// A positioned, typed lexical symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalSymbol {
    pub kind: SymbolKind,
    pub text: String,
    /// Byte offset of the first character of `text` in the source.
    pub start: usize,
}

impl LexicalSymbol {
    pub fn new(kind: SymbolKind, text: impl Into<String>, start: usize) -> Self {
        LexicalSymbol {
            kind,
            text: text.into(),
            start,
        }
    }

    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset just past this symbol; the next match begins here.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

impl fmt::Display for LexicalSymbol {
    /// Compact one-line rendering, useful in diagnostics and test failures.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.text, self.start)
    }
}
