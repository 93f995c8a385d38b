//! Listing processing API
//!
//! [`convert`] is the whole core in one call: text in, tree out. [`process_file`] wraps it
//! with the outer steps the binary needs (reading bytes, decoding, rendering).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::dirtree::decoding::decode;
use crate::dirtree::formats::{to_json_str, to_treeviz_str, to_yaml_str};
use crate::dirtree::model::Root;
use crate::dirtree::parser::{parse_listing_with, ParseError, ParseOptions};
use crate::dirtree::reconstruct::reconstruct;

/// Why a listing could not be turned into a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The text does not follow the listing grammar
    Parse(ParseError),
    /// Parsing succeeded but yielded no block to root the tree in
    EmptyListing,
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Parse(error) => Some(error),
            ConversionError::EmptyListing => None,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Parse(error) => write!(f, "Invalid listing at {}", error),
            ConversionError::EmptyListing => write!(f, "could not build root"),
        }
    }
}

impl From<ParseError> for ConversionError {
    fn from(error: ParseError) -> Self {
        ConversionError::Parse(error)
    }
}

/// Convert listing text into its tree with the default options
pub fn convert(source: &str) -> Result<Root, ConversionError> {
    convert_with(source, &ParseOptions::default())
}

/// Convert listing text into its tree
pub fn convert_with(source: &str, options: &ParseOptions) -> Result<Root, ConversionError> {
    let listing = parse_listing_with(source, options)?;
    let root = reconstruct(&listing).ok_or(ConversionError::EmptyListing)?;

    tracing::debug!(
        root = root.name(),
        files = root.folder.file_count(),
        folders = root.folder.folder_count(),
        "reconstructed tree"
    );
    Ok(root)
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Treeviz, OutputFormat::Json, OutputFormat::Yaml];

    /// Parse a format name like "treeviz" or "json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == format_str)
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Render a tree in this format
    pub fn render(&self, root: &Root) -> Result<String, ProcessingError> {
        match self {
            OutputFormat::Treeviz => Ok(to_treeviz_str(root)),
            OutputFormat::Json => to_json_str(root).map_err(|e| ProcessingError::Render(e.to_string())),
            OutputFormat::Yaml => to_yaml_str(root).map_err(|e| ProcessingError::Render(e.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to turn a listing file into output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingSpec {
    pub format: OutputFormat,
    pub options: ParseOptions,
}

impl ProcessingSpec {
    pub fn new(format: OutputFormat, options: ParseOptions) -> Self {
        Self { format, options }
    }

    /// Parse a format string, keeping the default parse options
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        Ok(Self::new(OutputFormat::from_string(format_str)?, ParseOptions::default()))
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    Io(String),
    Conversion(ConversionError),
    Render(String),
    InvalidFormat(String),
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Conversion(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Conversion(error) => write!(f, "{}", error),
            ProcessingError::Render(msg) => write!(f, "Failed to render tree: {}", msg),
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (available: {})",
                format,
                available_formats().join(", ")
            ),
        }
    }
}

impl From<ConversionError> for ProcessingError {
    fn from(error: ConversionError) -> Self {
        ProcessingError::Conversion(error)
    }
}

/// Read, decode, convert and render a listing file
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();

    let bytes = fs::read(file_path)
        .map_err(|e| ProcessingError::Io(format!("Failed to read {}: {}", file_path.display(), e)))?;
    let decoded = decode(&bytes);
    if decoded.had_errors {
        tracing::warn!(
            path = %file_path.display(),
            encoding = decoded.encoding,
            "listing contains malformed sequences; they were replaced"
        );
    }

    let root = convert_with(&decoded.text, &spec.options)?;
    spec.format.render(&root)
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    OutputFormat::ALL
        .iter()
        .map(|format| format.as_str().to_string())
        .collect()
}
