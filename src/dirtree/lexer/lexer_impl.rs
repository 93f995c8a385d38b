//! Implementation of the listing lexer
//!
//! logos does the matching. Every character falls into some token kind, so a lexing
//! error means the token table has a gap; the offending bytes are logged and skipped.

use crate::dirtree::lexer::tokens::Token;
use logos::Logos;

/// Tokenize listing text, keeping each token's byte span
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    Token::lexer(source)
        .spanned()
        .filter_map(|(result, span)| match result {
            Ok(token) => Some((token, span)),
            Err(()) => {
                tracing::warn!(?span, "skipping bytes no token matches");
                None
            }
        })
        .collect()
}
