//! Parser module for directory listings
//!
//! Turns listing text into the flat [`Listing`] of blocks. The grammar is split the same
//! way the text is: [`combinators`] for blanks, line ends and numbers, [`elements`] for
//! single entry lines, [`block`] for `Directory:` sections and the whole report.
//!
//! Parsing is all-or-nothing. Any rule failing anywhere aborts the parse and the caller
//! gets one [`ParseError`] describing the farthest point reached.

pub(crate) mod block;
pub(crate) mod combinators;
pub(crate) mod elements;
pub mod error;

use chumsky::{Parser, Stream};
use std::sync::Arc;

use crate::dirtree::ast::Listing;
use crate::dirtree::date::DateOrder;
use crate::dirtree::lexer::lex_with_spans;

pub use error::ParseError;

/// Knobs that change how listing text is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub date_order: DateOrder,
}

impl ParseOptions {
    pub fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }
}

/// Parse listing text with the default options
pub fn parse_listing(source: &str) -> Result<Listing, ParseError> {
    parse_listing_with(source, &ParseOptions::default())
}

/// Parse listing text into its flat blocks
pub fn parse_listing_with(source: &str, options: &ParseOptions) -> Result<Listing, ParseError> {
    let tokens = lex_with_spans(source);
    let eoi = source.len();
    let stream = Stream::from_iter(
        eoi..eoi,
        tokens
            .into_iter()
            .map(|(token, span)| ((token, span.clone()), span)),
    );

    let shared: Arc<str> = Arc::from(source);
    let listing = block::listing(shared, options.date_order)
        .parse(stream)
        .map_err(|errors| ParseError::from_errors(source, errors))?;

    tracing::debug!(
        blocks = listing.blocks.len(),
        elements = listing.element_count(),
        "parsed listing"
    );
    Ok(listing)
}
