//! Test helpers for dirtree
//!
//! Parser and reconstruction tests assert on trees through the fluent API in
//! [`tree_assertions`] instead of matching on nested `Node` values by hand:
//!
//! ```rust,ignore
//! assert_tree(&root)
//!     .name(r"C:\Data")
//!     .child_count(2)
//!     .child(1, |sub| {
//!         sub.assert_folder().name("Sub").child_count(1);
//!     });
//! ```
//!
//! Listing fixtures live in [`listings`]; each one is written the way the listing tool
//! prints it, column padding included.

pub mod listings;
pub mod tree_assertions;

pub use tree_assertions::assert_tree;
