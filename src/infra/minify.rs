//! Default compression collaborators
//!
//! JavaScript goes through `better-minify-js`, stylesheets through
//! `lightningcss`. Both artifacts start with a version banner.

use better_minify_js::{minify, Session, TopLevelMode};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::config::defaults::{BANNER_PRODUCT, STYLESHEET_EXTENSION};
use crate::core::compress::{Artifact, ArtifactKind, Compressor, CssJob, JsJob};
use crate::error::CompressError;
use crate::infra::filesystem;

/// Banner placed at the top of every artifact
pub fn banner(version: &str) -> String {
    format!("/*! {BANNER_PRODUCT} {version} */\n")
}

/// Compressor backed by the bundled minifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct MinifyCompressor;

impl MinifyCompressor {
    pub fn new() -> Self {
        Self
    }
}

/// Read `paths` in order and join them with newlines
fn concatenate(paths: &[impl AsRef<Path>]) -> Result<(String, u64), CompressError> {
    let mut bundle = String::new();
    let mut original_size = 0u64;

    for path in paths {
        let path = path.as_ref();
        tracing::debug!("Reading {}", path.display());
        let content = filesystem::read_file(path).map_err(|source| CompressError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        original_size += content.len() as u64;
        bundle.push_str(&content);
        if !content.ends_with('\n') {
            bundle.push('\n');
        }
    }

    Ok((bundle, original_size))
}

/// Prepend the banner, write the artifact and collect its statistics
fn emit(
    kind: ArtifactKind,
    build_dir: &Path,
    output_name: &str,
    version: &str,
    minified: &[u8],
    source_files: usize,
    original_size: u64,
) -> Result<Artifact, CompressError> {
    let mut content = banner(version).into_bytes();
    content.extend_from_slice(minified);

    filesystem::create_dir_all(build_dir)?;
    let path = build_dir.join(output_name);
    filesystem::write_file(&path, &content)?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());

    Ok(Artifact {
        kind,
        name: output_name.to_string(),
        path,
        source_files,
        original_size,
        minified_size: content.len() as u64,
        sha256: hex::encode(Sha256::digest(&content)),
    })
}

/// Minify a JavaScript bundle in global top-level mode
pub fn minify_js(source: &str, output_name: &str) -> Result<Vec<u8>, CompressError> {
    let session = Session::new();
    let mut minified = Vec::with_capacity(source.len());
    minify(&session, TopLevelMode::Global, source.as_bytes(), &mut minified).map_err(|e| {
        CompressError::MinifyJs {
            output: output_name.to_string(),
            error: format!("{e:?}"),
        }
    })?;
    Ok(minified)
}

/// Minify a stylesheet bundle
pub fn minify_css(source: &str, output_name: &str) -> Result<String, CompressError> {
    let to_error = |error: String| CompressError::MinifyCss {
        output: output_name.to_string(),
        error,
    };

    let sheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| to_error(e.to_string()))?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| to_error(e.to_string()))?;
    Ok(printed.code)
}

impl Compressor for MinifyCompressor {
    fn compress_js(&self, job: &JsJob<'_>) -> Result<Artifact, CompressError> {
        let sources = job.files.source_paths(job.source_dir);
        let (bundle, original_size) = concatenate(&sources)?;
        let minified = minify_js(&bundle, job.output_name)?;

        emit(
            ArtifactKind::Js,
            job.build_dir,
            job.output_name,
            job.version,
            &minified,
            sources.len(),
            original_size,
        )
    }

    fn compress_css(&self, job: &CssJob<'_>) -> Result<Artifact, CompressError> {
        let sources = filesystem::list_files_with_extension(job.source_dir, STYLESHEET_EXTENSION)?;
        if sources.is_empty() {
            return Err(CompressError::NoStylesheets {
                dir: job.source_dir.to_path_buf(),
            });
        }

        let (bundle, original_size) = concatenate(&sources)?;
        let minified = minify_css(&bundle, job.output_name)?;

        emit(
            ArtifactKind::Css,
            job.build_dir,
            job.output_name,
            job.version,
            minified.as_bytes(),
            sources.len(),
            original_size,
        )
    }
}
