//! Compression collaborator interface
//!
//! The orchestrator hands each artifact to a [`Compressor`]; the default
//! implementation lives in [`crate::infra::minify`].

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::order::DependencyOrder;
use crate::error::CompressError;

/// Kind of artifact produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Minified JavaScript bundle
    Js,
    /// Minified stylesheet bundle
    Css,
}

/// A written artifact and its statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// What the artifact holds
    pub kind: ArtifactKind,
    /// File name inside the build directory
    pub name: String,
    /// Full path written
    pub path: PathBuf,
    /// Number of source files concatenated
    pub source_files: usize,
    /// Total size of the sources in bytes
    pub original_size: u64,
    /// Size of the written artifact in bytes
    pub minified_size: u64,
    /// Hex SHA-256 of the written artifact
    pub sha256: String,
}

impl Artifact {
    /// Size reduction as a percentage
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            (1.0 - (self.minified_size as f64 / self.original_size as f64)) * 100.0
        }
    }

    /// Bytes saved by minification
    pub fn bytes_saved(&self) -> u64 {
        self.original_size.saturating_sub(self.minified_size)
    }
}

/// Arguments of a JavaScript compression call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsJob<'a> {
    pub source_dir: &'a Path,
    pub output_name: &'a str,
    pub build_dir: &'a Path,
    pub version: &'a str,
    pub files: DependencyOrder,
}

/// Arguments of a CSS compression call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssJob<'a> {
    pub source_dir: &'a Path,
    pub output_name: &'a str,
    pub build_dir: &'a Path,
    pub version: &'a str,
}

/// Something that turns sources into a minified artifact on disk
pub trait Compressor {
    /// Concatenate `job.files` from `job.source_dir` in order and write one artifact
    fn compress_js(&self, job: &JsJob<'_>) -> Result<Artifact, CompressError>;

    /// Bundle the stylesheets in `job.source_dir` into one artifact
    fn compress_css(&self, job: &CssJob<'_>) -> Result<Artifact, CompressError>;
}
