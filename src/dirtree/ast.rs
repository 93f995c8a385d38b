//! Flat listing representation
//!
//! This is what the parser produces: one [`Block`] per `Directory:` section, each holding
//! the raw [`Element`]s printed under it. Elements never contain other elements. Linking
//! a folder element to the block that lists its contents is the job of
//! [`reconstruct`](crate::dirtree::reconstruct).

pub mod position;

pub use position::{Position, SourceLocation};

use chrono::NaiveDateTime;
use std::fmt;

/// The attribute column of an entry line, e.g. `d-----` or `-a---l`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mode(String);

impl Mode {
    pub fn new(flags: impl Into<String>) -> Self {
        Self(flags.into())
    }

    /// Only the first flag decides what the rest of the line looks like
    pub fn is_directory(&self) -> bool {
        self.0.starts_with('d')
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry line of a block
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Folder {
        mode: Mode,
        timestamp: NaiveDateTime,
        name: String,
    },
    File {
        mode: Mode,
        timestamp: NaiveDateTime,
        size: u64,
        name: String,
    },
}

impl Element {
    pub fn name(&self) -> &str {
        match self {
            Element::Folder { name, .. } | Element::File { name, .. } => name,
        }
    }

    pub fn mode(&self) -> &Mode {
        match self {
            Element::Folder { mode, .. } | Element::File { mode, .. } => mode,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            Element::Folder { timestamp, .. } | Element::File { timestamp, .. } => *timestamp,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Element::Folder { .. })
    }
}

/// A `Directory:` section: the directory path and its immediate entries
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub path: String,
    pub elements: Vec<Element>,
}

impl Block {
    pub fn new(path: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            path: path.into(),
            elements,
        }
    }
}

/// All blocks of one report, in the order they were printed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub blocks: Vec<Block>,
}

impl Listing {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The first block is always the top of the tree
    pub fn root(&self) -> Option<&Block> {
        self.blocks.first()
    }

    pub fn element_count(&self) -> usize {
        self.blocks.iter().map(|block| block.elements.len()).sum()
    }
}
