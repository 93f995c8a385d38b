//! Rebuilding the folder tree from the flat listing.
//!
//! Each block only lists its immediate entries. A folder entry named `n` inside the block
//! for path `P` finds its own entries in the block whose path is exactly `P\n`. The path
//! index is built once over all blocks and dropped when the tree is done.
//!
//! Paths are compared verbatim: no case folding, no trailing-separator stripping.

use std::collections::HashMap;

use crate::dirtree::ast::{Element, Listing};
use crate::dirtree::model::{File, Folder, Node, Properties, Root};

/// Separator used by the listing tool to join a directory path and an entry name
pub const PATH_SEPARATOR: char = '\\';

/// Path of an entry named `name` inside the directory `parent`
pub fn child_path(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + 1 + name.len());
    path.push_str(parent);
    path.push(PATH_SEPARATOR);
    path.push_str(name);
    path
}

/// Non-owning lookup from directory path to that directory's entries
struct PathIndex<'a> {
    entries: HashMap<&'a str, &'a [Element]>,
}

impl<'a> PathIndex<'a> {
    /// When two blocks share a path the later one replaces the earlier one
    fn new(listing: &'a Listing) -> Self {
        let mut entries = HashMap::with_capacity(listing.blocks.len());
        for block in &listing.blocks {
            let previous = entries.insert(block.path.as_str(), block.elements.as_slice());
            if previous.is_some() {
                tracing::warn!(path = %block.path, "duplicate directory block, keeping the last one");
            }
        }
        Self { entries }
    }

    /// Entries of the directory at `path`; an unlisted directory has none
    fn children(&self, path: &str) -> &'a [Element] {
        self.entries.get(path).copied().unwrap_or(&[])
    }
}

fn build_nodes(index: &PathIndex<'_>, parent: &str, elements: &[Element]) -> Vec<Node> {
    elements
        .iter()
        .map(|element| build_node(index, parent, element))
        .collect()
}

fn build_node(index: &PathIndex<'_>, parent: &str, element: &Element) -> Node {
    match element {
        Element::File {
            timestamp,
            size,
            name,
            ..
        } => Node::File(File::new(
            name.clone(),
            Properties::modified_at(*timestamp),
            *size,
        )),
        Element::Folder {
            timestamp, name, ..
        } => {
            let path = child_path(parent, name);
            let children = build_nodes(index, &path, index.children(&path));
            Node::Folder(
                Folder::new(name.clone(), children)
                    .with_properties(Properties::modified_at(*timestamp)),
            )
        }
    }
}

/// Build the tree rooted at the first block of `listing`.
///
/// Returns `None` only when the listing has no blocks at all. The root's entries always
/// come from the first block itself, even if a later block repeats the root path.
pub fn reconstruct(listing: &Listing) -> Option<Root> {
    let root = listing.root()?;
    let index = PathIndex::new(listing);
    let children = build_nodes(&index, &root.path, &root.elements);
    Some(Root::new(Folder::new(root.path.clone(), children)))
}
