//! End-to-end recognition pipeline
//!
//! Chains the three stages (tokenize, map to terminals, analyze) against
//! the bundled DDL tables behind one entry point. Each stage's typed error
//! is wrapped unchanged, so callers can still see the offending offset,
//! symbol kind, or terminal.

use crate::lexer::{tokenize, LexError};
use crate::parser::{analyze, ParseError, ParseTable, TraceRecord};
use crate::terminals::{map_terminals, MapError};
use std::fmt;

/// A failure in any stage of recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    Lex(LexError),
    Map(MapError),
    Parse(ParseError),
}

impl fmt::Display for RecognizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognizeError::Lex(e) => write!(f, "tokenization failed: {}", e),
            RecognizeError::Map(e) => write!(f, "terminal mapping failed: {}", e),
            RecognizeError::Parse(e) => write!(f, "parse failed: {}", e),
        }
    }
}

impl std::error::Error for RecognizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecognizeError::Lex(e) => Some(e),
            RecognizeError::Map(e) => Some(e),
            RecognizeError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for RecognizeError {
    fn from(e: LexError) -> Self {
        RecognizeError::Lex(e)
    }
}

impl From<MapError> for RecognizeError {
    fn from(e: MapError) -> Self {
        RecognizeError::Map(e)
    }
}

impl From<ParseError> for RecognizeError {
    fn from(e: ParseError) -> Self {
        RecognizeError::Parse(e)
    }
}

/// Recognize a statement against the bundled DDL grammar.
///
/// Returns the automaton's step trace on acceptance.
pub fn recognize(source: &str) -> Result<Vec<TraceRecord>, RecognizeError> {
    let symbols = tokenize(source)?;
    let terminals = map_terminals(&symbols)?;
    let trace = analyze(&terminals, ParseTable::default_table())?;
    Ok(trace)
}
