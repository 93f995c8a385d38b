//! Fluent assertion API for reconstructed trees

use crate::dirtree::model::{File, Folder, Node, Root};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for the root folder of a tree
pub fn assert_tree(root: &Root) -> FolderAssertion<'_> {
    FolderAssertion {
        folder: &root.folder,
        context: "root".to_string(),
    }
}

fn summarize_children(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| match child {
            Node::Folder(folder) => format!("{}\\", folder.name),
            Node::File(file) => file.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is a folder and return folder-specific assertions
    pub fn assert_folder(self) -> FolderAssertion<'a> {
        match self.node {
            Node::Folder(folder) => FolderAssertion {
                folder,
                context: self.context,
            },
            Node::File(file) => panic!(
                "{}: Expected Folder, found File '{}'",
                self.context, file.name
            ),
        }
    }

    /// Assert this node is a file and return file-specific assertions
    pub fn assert_file(self) -> FileAssertion<'a> {
        match self.node {
            Node::File(file) => FileAssertion {
                file,
                context: self.context,
            },
            Node::Folder(folder) => panic!(
                "{}: Expected File, found Folder '{}' with {} children",
                self.context,
                folder.name,
                folder.children.len()
            ),
        }
    }
}

// ============================================================================
// Folder Assertions
// ============================================================================

pub struct FolderAssertion<'a> {
    folder: &'a Folder,
    context: String,
}

impl<'a> FolderAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.folder.name, expected,
            "{}: Expected folder name '{}', found '{}'",
            self.context, expected, self.folder.name
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.folder.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_children(&self.folder.children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.folder.children.len(),
            "{}: Child index {} out of bounds (folder has {} children)",
            self.context,
            index,
            self.folder.children.len()
        );

        assertion(NodeAssertion {
            node: &self.folder.children[index],
            context: format!("{}/{}", self.context, self.folder.children[index].name()),
        });
        self
    }

    /// Assert the children's names, in order
    pub fn child_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.folder.children.iter().map(Node::name).collect();
        assert_eq!(actual, expected, "{}: children differ", self.context);
        self
    }
}

// ============================================================================
// File Assertions
// ============================================================================

pub struct FileAssertion<'a> {
    file: &'a File,
    context: String,
}

impl<'a> FileAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.file.name, expected,
            "{}: Expected file name '{}', found '{}'",
            self.context, expected, self.file.name
        );
        self
    }

    pub fn size(self, expected: u64) -> Self {
        assert_eq!(
            self.file.size, expected,
            "{}: Expected size {}, found {}",
            self.context, expected, self.file.size
        );
        self
    }
}
