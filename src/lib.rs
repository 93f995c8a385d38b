//! # dirtree
//!
//! Rebuilds a folder tree from the text of a recursive Windows directory listing.
//!
//! The listing prints one block per visited directory, each holding only that directory's
//! immediate entries. Nothing in the text nests one block inside another, so the work is
//! split in two passes:
//!
//! src/dirtree
//!   ├── lexer        logos tokens with byte spans
//!   ├── parser       chumsky grammar producing the flat [`Listing`](dirtree::ast::Listing)
//!   ├── reconstruct  path index + recursive build of the [`Root`](dirtree::model::Root)
//!   └── processor    the driver tying both passes together
//!
//! Decoding of the raw bytes, output formats and configuration live next to these and
//! are only used by the driver and the binary.

pub mod dirtree;

pub use dirtree::processor::{convert, convert_with, ConversionError};
