//! Dependency order of the PeteJS sources
//!
//! Later files reference symbols defined by earlier ones, so the sources
//! must be concatenated in exactly this order. The list is maintained by
//! hand; nothing here sorts or discovers files.

use std::path::{Path, PathBuf};

/// The JavaScript sources in concatenation order
pub const DEPENDENCY_ORDER: &[&str] = &[
    "Pete.prototype.js",
    "Pete.js",
    "Pete.Element.js",
    "Pete.Composite.js",
    "Pete.Observer.js",
];

/// Ordered list of source file names
///
/// Entry `n` may depend on any entry before it, never after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyOrder {
    files: &'static [&'static str],
}

impl DependencyOrder {
    /// Wrap an ordered file list
    pub const fn new(files: &'static [&'static str]) -> Self {
        Self { files }
    }

    /// The file names, in order
    pub fn files(&self) -> &'static [&'static str] {
        self.files
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the file names in order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().copied()
    }

    /// Position of a file in the order, if listed
    pub fn position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|&f| f == name)
    }

    /// Full paths of the sources inside `source_dir`, in order
    pub fn source_paths(&self, source_dir: &Path) -> Vec<PathBuf> {
        self.iter().map(|f| source_dir.join(f)).collect()
    }
}

impl Default for DependencyOrder {
    fn default() -> Self {
        Self::new(DEPENDENCY_ORDER)
    }
}
