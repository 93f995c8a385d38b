//! Treeviz formatter for reconstructed trees

use crate::dirtree::model::{Node, Root};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render the tree with box-drawing connectors, one node per line
pub fn to_treeviz_str(root: &Root) -> String {
    let mut result = String::new();
    result.push_str(root.name());
    result.push('\n');
    append_children(&mut result, root.children(), "");
    result
}

fn node_label(node: &Node) -> String {
    let modified = node
        .properties()
        .modified
        .map(|at| format!(" @ {}", at.format(TIMESTAMP_FORMAT)))
        .unwrap_or_default();

    match node {
        Node::Folder(folder) => format!(
            "folder: {}{} [{} items]",
            truncate(&folder.name, 40),
            modified,
            folder.children.len()
        ),
        Node::File(file) => format!(
            "file: {}{} ({} bytes)",
            truncate(&file.name, 40),
            modified,
            file.size
        ),
    }
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    result.push_str(&format!("{}{} {}\n", prefix, connector, node_label(node)));

    if let Node::Folder(folder) = node {
        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_children(result, &folder.children, &new_prefix);
    }
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}
