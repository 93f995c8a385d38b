//! In-memory filesystem model built from a listing.
//!
//! Folders own their children outright; there is no sharing between nodes. Everything is
//! serde-serializable so the tree can be written out as JSON or YAML.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamps attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Properties {
    pub modified: Option<NaiveDateTime>,
    /// Directory listings never print access times, so this stays `None` for parsed trees
    pub accessed: Option<NaiveDateTime>,
}

impl Properties {
    pub fn new(modified: Option<NaiveDateTime>, accessed: Option<NaiveDateTime>) -> Self {
        Self { modified, accessed }
    }

    pub fn modified_at(modified: NaiveDateTime) -> Self {
        Self::new(Some(modified), None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub properties: Properties,
    pub size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, properties: Properties, size: u64) -> Self {
        Self {
            name: name.into(),
            properties,
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub properties: Properties,
    pub children: Vec<Node>,
}

impl Folder {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::default(),
            children,
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Direct child with the given name
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Number of files anywhere below this folder
    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::File(_) => 1,
                Node::Folder(folder) => folder.file_count(),
            })
            .sum()
    }

    /// Number of folders anywhere below this folder, not counting itself
    pub fn folder_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::File(_) => 0,
                Node::Folder(folder) => 1 + folder.folder_count(),
            })
            .sum()
    }

    /// Sum of all file sizes below this folder
    pub fn total_size(&self) -> u64 {
        self.children
            .iter()
            .map(|child| match child {
                Node::File(file) => file.size,
                Node::Folder(folder) => folder.total_size(),
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder(Folder),
    File(File),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Node::Folder(folder) => &folder.properties,
            Node::File(file) => &file.properties,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }
}

/// The reconstructed tree. Its folder is named after the first block's path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub folder: Folder,
}

impl Root {
    pub fn new(folder: Folder) -> Self {
        Self { folder }
    }

    pub fn name(&self) -> &str {
        &self.folder.name
    }

    pub fn children(&self) -> &[Node] {
        &self.folder.children
    }
}
