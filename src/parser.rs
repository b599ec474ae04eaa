//! Parser module for the DDL recognizer
//!
//! A standard table-driven predictive parse: the parse table plays the role
//! of the LL(1) table, the automaton's explicit stack holds the pending
//! production right-hand sides, and a single lookahead terminal selects
//! productions. The engine is grammar-agnostic; the bundled DDL table is
//! just one configuration, and a different table reuses the same machinery.

pub mod automaton;
pub mod table;

pub use automaton::{analyze, ParseError, StackAutomaton, TraceRecord};
pub use table::{ParseTable, ParserState, StackSymbol};
