//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no build logic - that belongs in the [`crate::core`] module.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::DEFAULT_BUILD_DIR;
use crate::core::build::{run_build, BuildReport, BuildRequest};
use crate::error::BuildError;
use crate::infra::minify::MinifyCompressor;

/// Petebuild - minify PeteJS into versioned artifacts
///
/// Concatenates the JavaScript sources in dependency order and writes
/// Pete_<VERSION>.min.js (and Pete_CSS_<VERSION>.min.js when --css_src is given).
#[derive(Parser, Debug)]
#[command(name = "petebuild")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Example:\n  petebuild -v 3.0.0 --js_src src/ --css_src resources/css/ --build_dir build")]
pub struct Cli {
    /// The version of the minified script, must be specified
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// The location of the JavaScript source files, must be specified
    #[arg(long = "js_src", value_name = "PATH")]
    pub js_src: Option<String>,

    /// The location of the CSS files
    #[arg(long = "css_src", value_name = "PATH")]
    pub css_src: Option<String>,

    /// The location where the minified files will be written
    #[arg(long = "build_dir", value_name = "PATH", default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Enable verbose output (repeat for debug)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the build summary
    #[arg(long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print the build report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Turn the parsed flags into a build request
    pub fn request(&self) -> BuildRequest {
        let mut request = BuildRequest::new(
            self.version.clone().unwrap_or_default(),
            self.js_src.clone().unwrap_or_default(),
        )
        .with_build_dir(self.build_dir.clone());
        if let Some(css_src) = &self.css_src {
            request = request.with_css_source(css_src.clone());
        }
        request
    }

    /// Run the build with the bundled minifiers
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let request = self.request();
        request.validate()?;

        let spinner = (!self.quiet && !self.json)
            .then(|| output::create_spinner(&format!("Minifying PeteJS {}", request.version)));
        let result = run_build(&request, &MinifyCompressor::new());
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }
}
