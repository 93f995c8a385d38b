//! Builders for listing text shared by the integration tests

#![allow(dead_code)]

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture to be readable")
}

pub const COLUMN_HEADER: &str = "Mode                 LastWriteTime         Length Name\n\
                                 ----                 -------------         ------ ----\n";

/// One entry line of a block
#[derive(Debug, Clone)]
pub enum Entry {
    File { name: String, size: u64 },
    Folder { name: String },
}

impl Entry {
    pub fn file(name: &str, size: u64) -> Self {
        Entry::File {
            name: name.to_string(),
            size,
        }
    }

    pub fn folder(name: &str) -> Self {
        Entry::Folder {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } | Entry::Folder { name } => name,
        }
    }

    fn line(&self, mode: Option<&str>) -> String {
        match self {
            Entry::File { name, size } => format!(
                "{:<6}          1/2/2017     09:30 {:>14} {}\n",
                mode.unwrap_or("-a---"),
                size,
                name
            ),
            Entry::Folder { name } => format!(
                "{:<6}          1/2/2017     09:00                {}\n",
                mode.unwrap_or("d----"),
                name
            ),
        }
    }
}

/// Render one `Directory:` block, column padding included
pub fn block(path: &str, entries: &[Entry]) -> String {
    block_with_mode_override(path, entries, None)
}

/// Render a block where the entry at `index` carries `mode` instead of its usual flag
pub fn block_with_mode_override(
    path: &str,
    entries: &[Entry],
    over: Option<(usize, &str)>,
) -> String {
    let mut text = format!("    Directory: {}\n\n\n{}", path, COLUMN_HEADER);
    for (i, entry) in entries.iter().enumerate() {
        let mode = over.and_then(|(index, mode)| (index == i).then_some(mode));
        text.push_str(&entry.line(mode));
    }
    text.push_str("\n\n");
    text
}

/// Join rendered blocks the way the listing tool prints them
pub fn listing(blocks: &[String]) -> String {
    let mut text = String::from("\n");
    for block in blocks {
        text.push_str(block);
    }
    text
}
