//! Build orchestration
//!
//! Validates a [`BuildRequest`], derives the versioned artifact names and
//! drives the compression collaborators: JavaScript always, CSS only when
//! a stylesheet directory was given. Nothing here touches the filesystem.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::defaults::{
    ARTIFACT_SUFFIX, CSS_ARTIFACT_PREFIX, DEFAULT_BUILD_DIR, JS_ARTIFACT_PREFIX,
};
use crate::core::compress::{Artifact, Compressor, CssJob, JsJob};
use crate::core::order::DependencyOrder;
use crate::error::BuildError;

/// Name of the JavaScript artifact for `version`
pub fn js_output_name(version: &str) -> String {
    format!("{JS_ARTIFACT_PREFIX}{version}{ARTIFACT_SUFFIX}")
}

/// Name of the CSS artifact for `version`
pub fn css_output_name(version: &str) -> String {
    format!("{CSS_ARTIFACT_PREFIX}{version}{ARTIFACT_SUFFIX}")
}

/// Inputs of one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Version embedded in the artifact names
    pub version: String,
    /// Directory holding the JavaScript sources
    pub js_source_dir: PathBuf,
    /// Directory holding the stylesheets, if CSS should be built
    pub css_source_dir: Option<PathBuf>,
    /// Destination of the artifacts
    pub build_dir: PathBuf,
}

impl BuildRequest {
    /// Create a request that writes into the current directory
    pub fn new(version: impl Into<String>, js_source_dir: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            js_source_dir: js_source_dir.into(),
            css_source_dir: None,
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
        }
    }

    /// Also build the stylesheets found in `dir`
    ///
    /// An empty path counts as no stylesheet directory.
    #[must_use]
    pub fn with_css_source(mut self, dir: impl Into<PathBuf>) -> Self {
        self.css_source_dir = Some(dir.into());
        self
    }

    /// Write artifacts into `dir`
    #[must_use]
    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = dir.into();
        self
    }

    /// Check the required inputs, version first
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.version.is_empty() {
            return Err(BuildError::MissingVersion);
        }
        if is_empty_path(&self.js_source_dir) {
            return Err(BuildError::MissingJsSource);
        }
        Ok(())
    }

    /// Stylesheet directory, if one was given and is non-empty
    pub fn css_source(&self) -> Option<&Path> {
        self.css_source_dir
            .as_deref()
            .filter(|dir| !is_empty_path(dir))
    }

    /// Name of the JavaScript artifact
    pub fn js_output_name(&self) -> String {
        js_output_name(&self.version)
    }

    /// Name of the CSS artifact
    pub fn css_output_name(&self) -> String {
        css_output_name(&self.version)
    }
}

fn is_empty_path(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// Result of a successful build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Version that was built
    pub version: String,
    /// Directory the artifacts were written into
    pub build_dir: PathBuf,
    /// Artifacts in the order they were produced
    pub artifacts: Vec<Artifact>,
}

/// Validate `request` and run the compression steps
pub fn run_build<C: Compressor + ?Sized>(
    request: &BuildRequest,
    compressor: &C,
) -> Result<BuildReport, BuildError> {
    request.validate()?;

    if semver::Version::parse(&request.version).is_err() {
        tracing::warn!("Version '{}' is not a semantic version", request.version);
    }

    let js_output = request.js_output_name();
    let css_output = request.css_output_name();
    let mut artifacts = Vec::with_capacity(2);

    tracing::info!(
        "Compressing JavaScript from {} into {}",
        request.js_source_dir.display(),
        js_output
    );
    artifacts.push(compressor.compress_js(&JsJob {
        source_dir: &request.js_source_dir,
        output_name: &js_output,
        build_dir: &request.build_dir,
        version: &request.version,
        files: DependencyOrder::default(),
    })?);

    if let Some(css_source_dir) = request.css_source() {
        tracing::info!(
            "Compressing CSS from {} into {}",
            css_source_dir.display(),
            css_output
        );
        artifacts.push(compressor.compress_css(&CssJob {
            source_dir: css_source_dir,
            output_name: &css_output,
            build_dir: &request.build_dir,
            version: &request.version,
        })?);
    } else {
        tracing::debug!("No CSS source given, skipping stylesheets");
    }

    Ok(BuildReport {
        version: request.version.clone(),
        build_dir: request.build_dir.clone(),
        artifacts,
    })
}
