//! Petebuild CLI - PeteJS minification build
//!
//! Entry point for the petebuild command-line application.

use clap::Parser;

use petebuild::cli::output::{display_error, format_report, format_report_json};
use petebuild::cli::Cli;
use petebuild::config::defaults::{FAILURE_EXIT_CODE, USAGE_EXIT_CODE};

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.run() {
        Ok(report) => {
            if cli.json {
                match format_report_json(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        display_error(&e.into());
                        std::process::exit(FAILURE_EXIT_CODE);
                    }
                }
            } else if !cli.quiet {
                print!("{}", format_report(&report));
            }
        }
        Err(e) if e.is_usage_error() => {
            eprintln!("Error: {e}");
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => {
            display_error(&anyhow::Error::new(e));
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}
