//! Parse failure reported to callers.
//!
//! chumsky hands back a list of `Simple` errors over `(Token, span)` pairs; callers only
//! ever see the single farthest one, converted to a [`ParseError`] with a line/column
//! position.

use chumsky::error::SimpleReason;
use std::fmt;
use std::ops::Range;

use crate::dirtree::ast::{Position, SourceLocation};
use crate::dirtree::parser::combinators::ParserError;

/// Why and where a listing failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte range of the offending input
    pub span: Range<usize>,
    /// Zero-based line/column of `span.start`
    pub position: Position,
    /// Descriptions of what would have been accepted
    pub expected: Vec<String>,
    /// Description of what was found, `None` at end of input
    pub found: Option<String>,
    /// Set when a rule rejected a well-formed token (bad mode flag, impossible date, ...)
    pub reason: Option<String>,
}

impl ParseError {
    /// Keep the error that got farthest into the input
    pub(crate) fn from_errors(source: &str, errors: Vec<ParserError>) -> Self {
        match errors.into_iter().max_by_key(|error| error.span().start) {
            Some(error) => Self::from_simple(source, &error),
            None => {
                let location = SourceLocation::new(source);
                Self {
                    span: source.len()..source.len(),
                    position: location.byte_to_position(source.len()),
                    expected: Vec::new(),
                    found: None,
                    reason: Some("listing could not be parsed".to_string()),
                }
            }
        }
    }

    pub(crate) fn from_simple(source: &str, error: &ParserError) -> Self {
        let span = error.span();
        let location = SourceLocation::new(source);
        let position = location.byte_to_position(span.start.min(source.len()));

        let mut expected: Vec<String> = match error.label() {
            Some(label) => vec![label.to_string()],
            None => error
                .expected()
                .map(|expected| match expected {
                    Some((token, _)) => token.to_string(),
                    None => "end of input".to_string(),
                })
                .collect(),
        };
        expected.sort();
        expected.dedup();

        let reason = match error.reason() {
            SimpleReason::Custom(message) => Some(message.clone()),
            _ => None,
        };

        Self {
            span,
            position,
            expected,
            found: error.found().map(|(token, _)| token.to_string()),
            reason,
        }
    }

    /// One-based line number, as shown in messages
    pub fn line(&self) -> usize {
        self.position.line + 1
    }

    /// One-based column number, as shown in messages
    pub fn column(&self) -> usize {
        self.position.column + 1
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: ", self.line(), self.column())?;
        if let Some(reason) = &self.reason {
            return f.write_str(reason);
        }
        match &self.found {
            Some(found) => write!(f, "unexpected {}", found)?,
            None => f.write_str("unexpected end of input")?,
        }
        if !self.expected.is_empty() {
            write!(f, ", expected {}", self.expected.join(" or "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
