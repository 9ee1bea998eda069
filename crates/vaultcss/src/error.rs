//! Error and warning types.
//!
//! Configuration problems split into two groups:
//!
//! - [`ConfigWarning`]: degradations that never stop construction (a custom
//!   media file that is missing or unreadable contributes nothing)
//! - [`ConfigError`]: options that cannot produce a usable compiler
//!
//! Per-stylesheet failures are [`TransformError`] and [`FormatError`], which
//! [`CompileError`] wraps for the full pipeline. None of them touch the
//! compiler's resolved configuration, so one failing file never affects
//! another.

use std::path::PathBuf;

use thiserror::Error;

/// A non-fatal problem found while resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    /// The custom media file does not exist.
    #[error("custom media file '{}' does not exist", path.display())]
    MissingFile { path: PathBuf },
    /// The custom media file exists but could not be read.
    #[error("failed to load custom media from '{}': {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

impl ConfigWarning {
    /// The file the warning refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigWarning::MissingFile { path } | ConfigWarning::Unreadable { path, .. } => path,
        }
    }
}

/// Error returned when options cannot be turned into a compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The browser-support query could not be resolved.
    #[error("invalid browser targets {query:?}: {message}")]
    Targets { query: Vec<String>, message: String },
    /// The value-scaling options are unusable.
    #[error("invalid fluid options: {0}")]
    InvalidFluid(String),
    /// A configuration file could not be read.
    #[error("failed to read config file '{}': {message}", path.display())]
    Read { path: PathBuf, message: String },
    /// A configuration file could not be deserialized.
    #[error("failed to parse config file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Fatal error reported by the transform engine for a single stylesheet.
///
/// `message` is the engine's own description, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("failed to transform {file}: {message}")]
    Minify { file: String, message: String },
    #[error("failed to print {file}: {message}")]
    Print { file: String, message: String },
}

impl TransformError {
    /// The engine message without the file prefix.
    pub fn message(&self) -> &str {
        match self {
            TransformError::Parse { message, .. }
            | TransformError::Minify { message, .. }
            | TransformError::Print { message, .. } => message,
        }
    }

    /// The stylesheet the error belongs to.
    pub fn file(&self) -> &str {
        match self {
            TransformError::Parse { file, .. }
            | TransformError::Minify { file, .. }
            | TransformError::Print { file, .. } => file,
        }
    }
}

/// Error reported by the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to format stylesheet: {message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error from the full compile pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
