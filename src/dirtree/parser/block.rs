//! Block- and listing-level rules.
//!
//! A listing looks like this (indentation and column widths vary):
//!
//! ```text
//!
//!     Directory: C:\Data
//!
//!
//! Mode                 LastWriteTime         Length Name
//! ----                 -------------         ------ ----
//! d-----          1/2/2017     09:00                Sub
//! -a----          1/2/2017     09:30            120 notes.txt
//!
//!
//! ```
//!
//! The path may also be printed alone on the line after `Directory:` when it is long.

use chumsky::prelude::*;
use std::sync::Arc;

use crate::dirtree::ast::{Block, Listing};
use crate::dirtree::date::DateOrder;
use crate::dirtree::lexer::Token;
use crate::dirtree::parser::combinators::{
    blank_line, line_end, rest_of_line, token, underline, whitespace, ParserError,
    TokenLocation,
};
use crate::dirtree::parser::elements::element;

/// Parse a `Directory:` title line, yielding the path
pub(crate) fn directory_header(
    source: Arc<str>,
) -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    let same_line = whitespace().ignore_then(rest_of_line(source.clone()));

    let next_line = whitespace()
        .or_not()
        .ignore_then(token(Token::Newline))
        .ignore_then(whitespace().or_not())
        .ignore_then(rest_of_line(source));

    whitespace()
        .or_not()
        .ignore_then(token(Token::Directory))
        .ignore_then(token(Token::Colon))
        .ignore_then(next_line.or(same_line))
        .then_ignore(token(Token::Newline))
        .labelled("directory header")
}

/// Parse the `Mode LastWriteTime Length Name` titles and the dashes beneath them
pub(crate) fn column_header() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    let titles = whitespace()
        .or_not()
        .ignore_then(token(Token::Mode))
        .ignore_then(whitespace())
        .ignore_then(token(Token::LastWriteTime))
        .ignore_then(whitespace())
        .ignore_then(token(Token::Length))
        .ignore_then(whitespace())
        .ignore_then(token(Token::Name))
        .ignore_then(whitespace().or_not())
        .ignore_then(token(Token::Newline));

    let underlines = whitespace()
        .or_not()
        .ignore_then(underline())
        .ignore_then(whitespace())
        .ignore_then(underline())
        .ignore_then(whitespace())
        .ignore_then(underline())
        .ignore_then(whitespace())
        .ignore_then(underline())
        .ignore_then(line_end());

    titles.ignore_then(underlines).labelled("column header")
}

/// Blank lines closing a block; the last block may instead run into the end of input
fn block_end() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    blank_line().repeated().at_least(1).ignored().or(end())
}

/// Parse one `Directory:` section with all of its entries
pub(crate) fn block(
    source: Arc<str>,
    order: DateOrder,
) -> impl Parser<TokenLocation, Block, Error = ParserError> + Clone {
    directory_header(source.clone())
        .then_ignore(blank_line().repeated().at_least(1))
        .then_ignore(column_header())
        .then(element(source, order).repeated())
        .then_ignore(block_end())
        .map(|(path, elements)| Block::new(path, elements))
}

/// Parse a complete report
pub(crate) fn listing(
    source: Arc<str>,
    order: DateOrder,
) -> impl Parser<TokenLocation, Listing, Error = ParserError> + Clone {
    blank_line()
        .repeated()
        .ignore_then(block(source, order).repeated().at_least(1))
        .then_ignore(whitespace().or_not())
        .then_ignore(end())
        .map(Listing::new)
}
