//! Table-driven predictive stack automaton
//!
//! The engine keeps an explicit stack of pending grammar obligations and a
//! cursor over the terminal word instead of a recursive-descent call stack,
//! so derivation depth is bounded only by heap memory. Each step pops one
//! stack symbol: terminals are matched against the input front, states are
//! expanded through the parse table under the current lookahead, and the
//! empty marker is a no-op. Lookahead never consumes input by itself.

use crate::parser::table::{ParseTable, ParserState, StackSymbol};
use crate::terminals::Terminal;
use serde::Serialize;
use std::fmt;

/// Errors produced while parsing a terminal word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The stack demanded one terminal but the input front was another.
    UnexpectedTerminal { expected: Terminal, found: Terminal },
    /// No table entry for this state under the current lookahead
    /// (`None` = end of input).
    NoTableEntry {
        state: ParserState,
        lookahead: Option<Terminal>,
    },
    /// Input ran out while the stack still demanded a terminal.
    UnconsumedObligations { expected: Terminal },
    /// The grammar's obligations were satisfied but input remained.
    UnconsumedInput { found: Terminal },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedTerminal { expected, found } => {
                write!(f, "expected '{}' but found '{}'", expected, found)
            }
            ParseError::NoTableEntry { state, lookahead } => match lookahead {
                Some(terminal) => write!(
                    f,
                    "no table entry for state '{}' with lookahead '{}'",
                    state, terminal
                ),
                None => write!(f, "no table entry for state '{}' at end of input", state),
            },
            ParseError::UnconsumedObligations { expected } => {
                write!(f, "input ended but '{}' was still expected", expected)
            }
            ParseError::UnconsumedInput { found } => {
                write!(f, "statement complete but input continues with '{}'", found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// One diagnostic snapshot, captured before every automaton step.
///
/// Purely observational; parsing semantics never depend on the trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRecord {
    pub stack: Vec<StackSymbol>,
    pub remaining: Vec<Terminal>,
}

impl TraceRecord {
    fn capture(stack: &[StackSymbol], remaining: &[Terminal]) -> Self {
        TraceRecord {
            stack: stack.to_vec(),
            remaining: remaining.to_vec(),
        }
    }

    /// JSON rendering for external logging.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack:")?;
        for symbol in &self.stack {
            write!(f, " {}", symbol)?;
        }
        write!(f, " | remaining:")?;
        for terminal in &self.remaining {
            write!(f, " '{}'", terminal)?;
        }
        Ok(())
    }
}

/// The grammar-agnostic parsing engine.
///
/// Borrows an immutable parse table; all mutable state (stack, cursor,
/// trace) is scoped to a single `analyze` call, so one automaton can be
/// reused across inputs and one table across automatons.
#[derive(Debug, Clone)]
pub struct StackAutomaton<'a> {
    table: &'a ParseTable,
    start: ParserState,
}

impl<'a> StackAutomaton<'a> {
    pub fn new(table: &'a ParseTable) -> Self {
        StackAutomaton {
            table,
            start: ParserState::Start,
        }
    }

    /// Override the start state, for tables rooted elsewhere.
    pub fn with_start(table: &'a ParseTable, start: ParserState) -> Self {
        StackAutomaton { table, start }
    }

    /// Run the automaton over a terminal word.
    ///
    /// Accepts (returning the step trace) when the stack and the input are
    /// exhausted together; any mismatch fails fast with a typed error.
    /// Terminates on every input: each step either consumes a terminal,
    /// shrinks the stack, or replaces one state by a finite production,
    /// and productions are only applied while input obligations remain.
    pub fn analyze(&self, terminals: &[Terminal]) -> Result<Vec<TraceRecord>, ParseError> {
        // End marker below the start state: the start state is expanded
        // first, and the marker is what finally meets end-of-input.
        let mut stack = vec![
            StackSymbol::Terminal(Terminal::End),
            StackSymbol::State(self.start),
        ];
        let mut cursor = 0;
        let mut trace = Vec::new();

        loop {
            trace.push(TraceRecord::capture(&stack, &terminals[cursor..]));

            let top = match stack.pop() {
                Some(top) => top,
                None if cursor == terminals.len() => return Ok(trace),
                None => {
                    return Err(ParseError::UnconsumedInput {
                        found: terminals[cursor],
                    })
                }
            };

            match top {
                StackSymbol::Empty => {}
                StackSymbol::Terminal(Terminal::End) => {
                    if let Some(&found) = terminals.get(cursor) {
                        return Err(ParseError::UnconsumedInput { found });
                    }
                }
                StackSymbol::Terminal(expected) => match terminals.get(cursor) {
                    Some(&found) if found == expected => cursor += 1,
                    Some(&found) => {
                        return Err(ParseError::UnexpectedTerminal { expected, found })
                    }
                    None => return Err(ParseError::UnconsumedObligations { expected }),
                },
                StackSymbol::State(state) => {
                    let lookahead = terminals.get(cursor).copied();
                    match self.table.lookup(state, lookahead) {
                        // Reversed so the production's first symbol ends up
                        // on top and is matched first.
                        Some(rhs) => stack.extend(rhs.iter().rev().copied()),
                        None => return Err(ParseError::NoTableEntry { state, lookahead }),
                    }
                }
            }
        }
    }
}

/// Convenience function to analyze a terminal word against a table.
pub fn analyze(terminals: &[Terminal], table: &ParseTable) -> Result<Vec<TraceRecord>, ParseError> {
    StackAutomaton::new(table).analyze(terminals)
}
