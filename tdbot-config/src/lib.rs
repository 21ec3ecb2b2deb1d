//! tdbot settings: how Markdown is converted and how loudly it logs.
//!
//! Every key has a value in `defaults/tdbot.default.toml`, which is compiled in. A
//! `tdbot.toml` only needs the keys it changes; [`Loader`] stacks it and any command-line
//! overrides on top of the defaults.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tdbot_markdown::{OffsetUnit, ParserOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/tdbot.default.toml");

/// Top-level configuration consumed by tdbot applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TdbotConfig {
    pub markdown: MarkdownConfig,
    pub log: LogConfig,
}

/// Markdown conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub offset_unit: OffsetUnit,
    pub strikethrough: bool,
    pub autolink: bool,
    /// Zero means unlimited
    pub max_source_len: usize,
    pub max_nesting_depth: usize,
}

impl From<&MarkdownConfig> for ParserOptions {
    fn from(config: &MarkdownConfig) -> Self {
        ParserOptions {
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            max_source_len: (config.max_source_len > 0).then_some(config.max_source_len),
            max_nesting_depth: config.max_nesting_depth,
        }
    }
}

impl From<MarkdownConfig> for ParserOptions {
    fn from(config: MarkdownConfig) -> Self {
        ParserOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "tdbot.toml";

/// Builds a [`TdbotConfig`] from the embedded defaults plus whatever the bot or `tdmd` layers
/// on top. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only `defaults/tdbot.default.toml` so far.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// A tdbot.toml the user named explicitly, e.g. through `--config`. Building fails if it
    /// is missing.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        self
    }

    /// A tdbot.toml that may or may not exist.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false));
        self
    }

    /// `./tdbot.toml`, if there is one.
    pub fn with_local_file(self) -> Self {
        self.with_optional_file(LOCAL_CONFIG_FILE)
    }

    /// Override one dotted key, e.g. `markdown.strikethrough`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override `markdown.offset_unit`. The name is only checked by [`Loader::build`].
    pub fn with_offset_unit(self, unit: &str) -> Result<Self, ConfigError> {
        self.set_override("markdown.offset_unit", unit)
    }

    pub fn build(self) -> Result<TdbotConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<TdbotConfig, ConfigError> {
    Loader::new().build()
}
