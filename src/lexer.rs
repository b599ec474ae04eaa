//! Lexer module for the DDL recognizer
//!
//! Tokenization is table-driven: an ordered list of (kind, pattern) rules is
//! tried in declaration order at the current scan position and the first
//! anchored match wins. This is a deliberate disambiguation strategy rather
//! than longest-match: keyword rules are declared before the identifier
//! rule, so keywords can never be misread as identifiers.

pub mod lexer_impl;
pub mod patterns;
pub mod tokens;

pub use lexer_impl::{tokenize, LexError, Tokenizer};
pub use patterns::{PatternTable, SymbolKind};
pub use tokens::LexicalSymbol;
