//! Token definitions for directory listings
//!
//! Tokens are produced by the logos derive macro. Every input character belongs to some
//! token: letters, digits, the three punctuation marks the grammar cares about, blanks and
//! line breaks each have their own kind, and `Text` swallows everything else. Token values
//! are never stored; the parser reads numbers and names back from the source through the
//! token spans.
use logos::Logos;
use std::fmt;

/// All possible tokens in a directory listing
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Keywords
    #[token("Directory")]
    Directory,
    #[token("Mode")]
    Mode,
    #[token("LastWriteTime")]
    LastWriteTime,
    #[token("Length")]
    Length,
    #[token("Name")]
    Name,

    // Punctuation
    #[token(":")]
    Colon,
    #[token("/")]
    Slash,
    #[regex(r"-+")]
    Dashes,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[A-Za-z]+")]
    Word,

    // Carriage returns count as blanks so that a lone `\r` never stops a line
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    // Catch-all for path separators, dots, non-ASCII letters and the like
    #[regex(r"[^ \t\r\n0-9A-Za-z/:\-]+")]
    Text,
}

impl Token {
    /// Check if this token may appear inside a mode flag
    pub fn is_mode_part(&self) -> bool {
        matches!(self, Token::Word | Token::Dashes)
    }

    /// Short human description, used when reporting parse failures
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Directory => "'Directory'",
            Token::Mode => "'Mode'",
            Token::LastWriteTime => "'LastWriteTime'",
            Token::Length => "'Length'",
            Token::Name => "'Name'",
            Token::Colon => "':'",
            Token::Slash => "'/'",
            Token::Dashes => "dashes",
            Token::Number => "number",
            Token::Word => "word",
            Token::Whitespace => "whitespace",
            Token::Newline => "line break",
            Token::Text => "text",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
