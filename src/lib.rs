//! # ddlex
//!
//! A table-driven recognizer for a small DDL subset:
//! `ALTER TABLE <identifier> DROP COLUMN <identifier>`.
//!
//! The crate pairs two grammar-agnostic engines with statement-specific
//! configuration data:
//!
//! - a priority-ordered pattern tokenizer ([`lexer`]) that turns raw text
//!   into positioned, typed lexical symbols;
//! - a projection from symbols into the parser's terminal alphabet
//!   ([`terminals`]);
//! - a table-driven pushdown automaton ([`parser`]) that consumes the
//!   terminal word against an explicit transition table with an explicit
//!   stack of pending obligations.
//!
//! Both the pattern table and the parse table are configuration objects:
//! supply different tables and the same engines drive a different grammar.
//! [`pipeline::recognize`] wires the bundled DDL tables end to end.

pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod terminals;

pub use lexer::{tokenize, LexError, LexicalSymbol, PatternTable, SymbolKind, Tokenizer};
pub use parser::{
    analyze, ParseError, ParseTable, ParserState, StackAutomaton, StackSymbol, TraceRecord,
};
pub use pipeline::{recognize, RecognizeError};
pub use terminals::{map_terminals, MapError, Terminal};
