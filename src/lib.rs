//! Petebuild - build script for the PeteJS library
//!
//! Concatenates the PeteJS sources in their dependency order, minifies them,
//! and writes versioned artifacts into a build directory.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build orchestration (no I/O operations)
//! - [`infra`] - Infrastructure layer (filesystem, minifiers)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

use crate::core::build::{run_build, BuildReport, BuildRequest};
use crate::error::BuildError;
use crate::infra::minify::MinifyCompressor;

/// Build the minified artifacts using the bundled minifiers
///
/// Same validation as the command line, but failures come back as a
/// [`BuildError`] instead of terminating the process.
///
/// ```no_run
/// let report = petebuild::build("3.0.0", "src/", Some("resources/css/"), "build")?;
/// assert_eq!(report.artifacts.len(), 2);
/// # Ok::<(), petebuild::error::BuildError>(())
/// ```
pub fn build(
    version: &str,
    js_src: &str,
    css_src: Option<&str>,
    build_dir: &str,
) -> Result<BuildReport, BuildError> {
    let mut request = BuildRequest::new(version, js_src).with_build_dir(build_dir);
    if let Some(css_src) = css_src {
        request = request.with_css_source(css_src);
    }
    run_build(&request, &MinifyCompressor::new())
}
