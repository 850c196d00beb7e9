//! Error types for petebuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to list directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Errors raised by a compression collaborator
#[derive(Error, Debug)]
pub enum CompressError {
    /// A listed source file could not be read
    #[error("Failed to read source '{}': {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: FilesystemError,
    },

    /// The CSS source directory holds no stylesheets
    #[error("No .css files found in '{}'", dir.display())]
    NoStylesheets { dir: PathBuf },

    /// JavaScript minifier rejected the concatenated source
    #[error("Failed to minify JavaScript for '{output}': {error}")]
    MinifyJs { output: String, error: String },

    /// CSS minifier rejected the concatenated stylesheets
    #[error("Failed to minify CSS for '{output}': {error}")]
    MinifyCss { output: String, error: String },

    /// Writing the artifact failed
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Build errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// No version string was given
    #[error("You must provide a version.")]
    MissingVersion,

    /// No JavaScript source directory was given
    #[error("You must provide the location of the JavaScript source files.")]
    MissingJsSource,

    /// A compression collaborator failed
    #[error("Compression failed: {0}")]
    Compress(#[from] CompressError),
}

impl BuildError {
    /// Whether the error is a user-input error caught before any I/O
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::MissingVersion | Self::MissingJsSource)
    }
}
