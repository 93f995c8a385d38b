//! Configuration loader for dirtree.
//!
//! `defaults/dirtree.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. User files and CLI flags are layered on top
//! via [`Loader`] before deserializing into [`DirtreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::dirtree::date::DateOrder;
use crate::dirtree::parser::ParseOptions;
use crate::dirtree::processor::{OutputFormat, ProcessingSpec};

const DEFAULT_TOML: &str = include_str!("../../defaults/dirtree.default.toml");

/// Top-level configuration consumed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirtreeConfig {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub date_order: DateOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl DirtreeConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_date_order(self.parsing.date_order)
    }

    pub fn processing_spec(&self) -> ProcessingSpec {
        ProcessingSpec::new(self.output.format, self.parse_options())
    }
}

/// File picked up from the working directory when no `--config` is given
pub const LOCAL_CONFIG_FILE: &str = "dirtree.toml";

/// Layers TOML sources over the embedded defaults, later layers winning
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    layers: Vec<String>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self {
            builder,
            layers: vec!["defaults".to_string()],
        }
    }

    /// Layer a file given on the command line. Building fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a file that may not exist, such as [`LOCAL_CONFIG_FILE`]
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self.layers.push(path.display().to_string());
        self
    }

    /// Force the output format, overriding every file
    pub fn with_output_format(self, format: OutputFormat) -> Result<Self, ConfigError> {
        self.set_override("output.format", format.as_str())
    }

    fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        self.layers.push(format!("override {}", key));
        Ok(self)
    }

    pub fn build(self) -> Result<DirtreeConfig, ConfigError> {
        tracing::debug!(layers = ?self.layers, "loading configuration");
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
