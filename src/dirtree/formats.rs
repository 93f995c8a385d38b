//! Output formats for reconstructed trees
//!
//! - `treeviz`: indented box-drawing view, one node per line
//! - `json`: pretty-printed serde JSON of the [`Root`]
//! - `yaml`: serde YAML of the [`Root`]

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::dirtree::model::Root;

pub fn to_json_str(root: &Root) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(root)
}

pub fn to_yaml_str(root: &Root) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(root)
}
