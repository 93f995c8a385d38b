//! Lexical primitives shared by every grammar rule.
//!
//! All parsers here run over `(Token, byte range)` pairs. Values such as numbers and
//! names are read back from the source text through the byte ranges, which is why most
//! builders take the source as an `Arc<str>`.

use chumsky::prelude::*;
use chumsky::error::Error as _;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Arc;

use crate::dirtree::lexer::Token;

/// Type alias for token with span
pub(crate) type TokenLocation = (Token, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

/// Helper: source text covered by a run of tokens, right-trimmed
pub(crate) fn extract_text(source: &str, tokens: &[TokenLocation]) -> String {
    let (Some((_, first)), Some((_, last))) = (tokens.first(), tokens.last()) else {
        return String::new();
    };
    if first.start >= last.end || last.end > source.len() {
        return String::new();
    }
    source[first.start..last.end].trim_end().to_string()
}

/// Failure for a token that is not one of `kinds`
pub(crate) fn unexpected(span: Range<usize>, kinds: &[Token], found: TokenLocation) -> ParserError {
    Simple::expected_input_found(
        span.clone(),
        kinds.iter().map(|kind| Some((*kind, span.clone()))),
        Some(found),
    )
}

/// Match a specific token kind, yielding its byte range.
///
/// The failure names the kind as an expectation rather than a label so that rules built
/// on top can still put their own label on it.
pub(crate) fn token(
    expected: Token,
) -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter_map(move |span: Range<usize>, found: TokenLocation| {
        if found.0 == expected {
            Ok(found.1)
        } else {
            Err(unexpected(span, &[expected], found))
        }
    })
}

/// A run of spaces or tabs (never a line break)
pub(crate) fn whitespace() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token(Token::Whitespace).ignored()
}

/// A line break or the end of the input, which are treated the same
pub(crate) fn line_terminator() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token(Token::Newline).ignored().or(end())
}

/// Optional trailing blanks, then the end of the line
pub(crate) fn line_end() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    whitespace().or_not().ignore_then(line_terminator())
}

/// A line holding nothing but blanks. Always consumes a line break.
pub(crate) fn blank_line() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    whitespace()
        .or_not()
        .ignore_then(token(Token::Newline))
        .ignored()
}

/// An unsigned integer literal. Values that do not fit `N` are a parse failure.
pub(crate) fn number<N>(
    source: Arc<str>,
) -> impl Parser<TokenLocation, N, Error = ParserError> + Clone
where
    N: FromStr + Clone,
    N::Err: fmt::Display,
{
    token(Token::Number).try_map(move |span: Range<usize>, error_span| {
        let digits = &source[span];
        digits.parse::<N>().map_err(|e| {
            Simple::custom(error_span, format!("number '{}' is out of range: {}", digits, e))
        })
    })
}

/// One run of `-` characters, as used under the column titles
pub(crate) fn underline() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token(Token::Dashes).ignored()
}

/// Everything up to the line break, right-trimmed. Fails if nothing but blanks remain.
pub(crate) fn rest_of_line(
    source: Arc<str>,
) -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter::<TokenLocation, _, ParserError>(|(t, _): &TokenLocation| *t != Token::Newline)
        .repeated()
        .at_least(1)
        .try_map(move |tokens: Vec<TokenLocation>, span| {
            let text = extract_text(&source, &tokens);
            if text.is_empty() {
                Err(Simple::custom(span, "expected text before the end of the line"))
            } else {
                Ok(text)
            }
        })
}
