//! Parse table: the grammar expressed as data
//!
//! The automaton is grammar-agnostic; everything specific to the DDL subset
//! lives in the `ParseTable` supplied to it. An entry maps a parser state
//! plus a lookahead terminal to the stack-symbol sequence that replaces the
//! state on the stack. Entries keyed with a `None` lookahead are wildcards
//! consulted after the exact key, for productions that apply regardless of
//! the next terminal.

use crate::terminals::Terminal;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Non-terminal obligations the automaton expands via the table.
///
/// `ColumnTail` and `StatementTail` exist only in table entries the bundled
/// grammar never reaches; they are carried as inert configuration so the
/// same state set can serve a richer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParserState {
    Start,
    ColumnTail,
    StatementTail,
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Start => "start",
            ParserState::ColumnTail => "column-tail",
            ParserState::StatementTail => "statement-tail",
        };
        write!(f, "{}", name)
    }
}

/// One symbol on the automaton's stack: a terminal to match, a state to
/// expand, or the marker for an empty production right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StackSymbol {
    Terminal(Terminal),
    State(ParserState),
    Empty,
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackSymbol::Terminal(t) => write!(f, "<{}>", t),
            StackSymbol::State(s) => write!(f, "[{}]", s),
            StackSymbol::Empty => write!(f, "<empty>"),
        }
    }
}

/// The transition table driving the stack automaton.
///
/// Immutable after construction; one table can drive any number of
/// `analyze` calls concurrently since lookups never mutate it.
#[derive(Debug, Clone, Default)]
pub struct ParseTable {
    entries: HashMap<(ParserState, Option<Terminal>), Vec<StackSymbol>>,
}

impl ParseTable {
    pub fn new() -> Self {
        ParseTable::default()
    }

    /// Register a production selected by an exact lookahead terminal.
    pub fn insert(&mut self, state: ParserState, lookahead: Terminal, rhs: Vec<StackSymbol>) {
        self.entries.insert((state, Some(lookahead)), rhs);
    }

    /// Register a production that applies for any lookahead.
    pub fn insert_any(&mut self, state: ParserState, rhs: Vec<StackSymbol>) {
        self.entries.insert((state, None), rhs);
    }

    /// Look up the production for a state under the given lookahead.
    ///
    /// The exact `(state, lookahead)` key takes precedence over the
    /// state's wildcard entry, so lookahead-selected LL(1) tables behave
    /// as usual. `lookahead` is `None` at end of input.
    pub fn lookup(&self, state: ParserState, lookahead: Option<Terminal>) -> Option<&[StackSymbol]> {
        if let Some(la) = lookahead {
            if let Some(rhs) = self.entries.get(&(state, Some(la))) {
                return Some(rhs.as_slice());
            }
        }
        self.entries.get(&(state, None)).map(Vec::as_slice)
    }

    /// The bundled DDL grammar table.
    pub fn default_table() -> &'static ParseTable {
        &DEFAULT_TABLE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The bundled grammar: one production chain recognizing
/// `ALTER TABLE <identifier> DROP COLUMN <identifier>`.
///
/// The start production is registered under the wildcard lookahead, so a
/// statement beginning with the wrong keyword still expands and then fails
/// on the pushed `AlterTable` terminal with a precise expected/found
/// mismatch instead of a missing-entry error. The two tail-state entries
/// are inherited configuration the start production never reaches.
static DEFAULT_TABLE: Lazy<ParseTable> = Lazy::new(|| {
    use StackSymbol::{Empty, State, Terminal as T};

    let mut table = ParseTable::new();
    table.insert_any(
        ParserState::Start,
        vec![
            T(Terminal::AlterTable),
            T(Terminal::Identifier),
            T(Terminal::DropColumn),
            T(Terminal::Identifier),
        ],
    );
    // Inert: additional column references, had the grammar listed columns.
    table.insert(
        ParserState::ColumnTail,
        Terminal::Identifier,
        vec![T(Terminal::Identifier), State(ParserState::ColumnTail)],
    );
    // Inert: an empty statement tail, the epsilon production.
    table.insert_any(ParserState::StatementTail, vec![Empty]);
    table
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_start_and_tail_entries() {
        let table = ParseTable::default_table();
        assert_eq!(table.len(), 3);
        assert!(table.lookup(ParserState::Start, Some(Terminal::AlterTable)).is_some());
        assert!(table
            .lookup(ParserState::ColumnTail, Some(Terminal::Identifier))
            .is_some());
        assert!(table.lookup(ParserState::StatementTail, None).is_some());
    }

    #[test]
    fn test_wildcard_applies_to_any_lookahead() {
        let table = ParseTable::default_table();
        let on_alter = table.lookup(ParserState::Start, Some(Terminal::AlterTable));
        let on_drop = table.lookup(ParserState::Start, Some(Terminal::DropColumn));
        assert_eq!(on_alter, on_drop);
    }

    #[test]
    fn test_exact_entry_shadows_wildcard() {
        use StackSymbol::{Empty, Terminal as T};

        let mut table = ParseTable::new();
        table.insert_any(ParserState::Start, vec![Empty]);
        table.insert(
            ParserState::Start,
            Terminal::Identifier,
            vec![T(Terminal::Identifier)],
        );

        assert_eq!(
            table.lookup(ParserState::Start, Some(Terminal::Identifier)),
            Some(&[T(Terminal::Identifier)][..])
        );
        assert_eq!(
            table.lookup(ParserState::Start, Some(Terminal::AlterTable)),
            Some(&[Empty][..])
        );
    }

    #[test]
    fn test_missing_entry_is_none() {
        let table = ParseTable::default_table();
        assert_eq!(
            table.lookup(ParserState::ColumnTail, Some(Terminal::AlterTable)),
            None
        );
    }
}
