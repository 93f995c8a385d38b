//! Lexer module for directory listings
//!
//! The lexer is a vanilla logos tokenizer with no state. Everything context-dependent
//! (keywords only mattering at the start of a header, names running to the end of the
//! line) is left to the parser, which sees each token together with its byte span.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize_with_spans;
pub use tokens::Token;

/// Lexing function that preserves source spans for the parser
pub fn lex_with_spans(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let tokens = tokenize_with_spans(source);
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "lexed listing");
    tokens
}
