//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory laid out like the PeteJS repository
/// and provides utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new, empty test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a project with all JavaScript sources under `src/`
    /// and two stylesheets under `resources/css/`
    pub fn with_sources() -> Self {
        let project = Self::new();
        for (name, content) in SAMPLE_SOURCES {
            project.create_file(&format!("src/{name}"), content);
        }
        project.create_file("resources/css/base.css", SAMPLE_BASE_CSS);
        project.create_file("resources/css/widgets.css", SAMPLE_WIDGETS_CSS);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    #[allow(dead_code)]
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Names of all entries directly inside `name`, sorted
    #[allow(dead_code)]
    pub fn list_dir(&self, name: &str) -> Vec<String> {
        let mut entries: Vec<String> = std::fs::read_dir(self.dir.path().join(name))
            .expect("Failed to list directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        entries.sort();
        entries
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to run petebuild with arguments inside the project
#[allow(dead_code)]
pub fn run_petebuild(project: &TestProject, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_petebuild"));
    cmd.current_dir(project.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute petebuild")
}

/// One small source per entry of the dependency order.
/// Each file references something defined by the one before it.
#[allow(dead_code)]
pub const SAMPLE_SOURCES: &[(&str, &str)] = &[
    (
        "Pete.prototype.js",
        "String.prototype.petePrototypeMarker = function () {\n    return this.length;\n};\n",
    ),
    (
        "Pete.js",
        "var Pete = {\n    version: 'dev',\n    peteCoreMarker: function (s) {\n        return s.petePrototypeMarker();\n    }\n};\n",
    ),
    (
        "Pete.Element.js",
        "Pete.Element = {\n    peteElementMarker: function (s) {\n        return Pete.peteCoreMarker(s);\n    }\n};\n",
    ),
    (
        "Pete.Composite.js",
        "Pete.Composite = {\n    peteCompositeMarker: function (s) {\n        return Pete.Element.peteElementMarker(s);\n    }\n};\n",
    ),
    (
        "Pete.Observer.js",
        "Pete.Observer = {\n    peteObserverMarker: function (s) {\n        return Pete.Composite.peteCompositeMarker(s);\n    }\n};\n",
    ),
];

/// Marker names in dependency order, one per sample source
#[allow(dead_code)]
pub const SAMPLE_MARKERS: &[&str] = &[
    "petePrototypeMarker",
    "peteCoreMarker",
    "peteElementMarker",
    "peteCompositeMarker",
    "peteObserverMarker",
];

/// First stylesheet
#[allow(dead_code)]
pub const SAMPLE_BASE_CSS: &str = ".pete-base {\n    color: #ff0000;\n    padding: 0px;\n}\n";

/// Second stylesheet
#[allow(dead_code)]
pub const SAMPLE_WIDGETS_CSS: &str = ".pete-widget {\n    margin: 0px 0px 0px 0px;\n}\n";
