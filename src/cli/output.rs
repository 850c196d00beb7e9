//! Output formatting and progress indicators
//!
//! This module provides the spinner shown while minifying and the
//! summary printed once the artifacts are written.

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::build::BuildReport;

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Render the human-readable build summary
pub fn format_report(report: &BuildReport) -> String {
    let mut out = format!("{} Built PeteJS {}\n", status::SUCCESS, report.version);
    for artifact in &report.artifacts {
        let change = if artifact.bytes_saved() > 0 {
            format!("{:.1}% smaller", artifact.ratio())
        } else {
            "no reduction".to_string()
        };
        out.push_str(&format!(
            "  {} ({} files, {} -> {} bytes, {change})\n",
            artifact.path.display(),
            artifact.source_files,
            artifact.original_size,
            artifact.minified_size,
        ));
        out.push_str(&format!("    sha256 {}\n", artifact.sha256));
    }
    out
}

/// Render the build report as pretty JSON
pub fn format_report_json(report: &BuildReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print an error with its cause chain to stderr
pub fn display_error(err: &anyhow::Error) {
    eprintln!("{} Error: {err}", status::ERROR);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
