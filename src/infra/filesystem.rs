//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write bytes to a file, creating the parent directory if needed
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// List the files directly inside `dir` with the given extension, sorted by name
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FilesystemError> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: dir.to_path_buf(),
            error: e.to_string(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("build/out/Pete_1.0.0.min.js");
        write_file(&path, b"var a;").unwrap();
        assert_eq!(read_file(&path).unwrap(), "var a;");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Pete.js");
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, FilesystemError::ReadFile { path: ref p, .. } if p == &path));
    }

    #[test]
    fn test_list_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.css"), "b{}").unwrap();
        std::fs::write(dir.path().join("a.css"), "a{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.css")).unwrap();

        let files = list_files_with_extension(dir.path(), "css").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.css", "b.css"]);
    }

    #[test]
    fn test_list_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let result = list_files_with_extension(&dir.path().join("missing"), "css");
        assert!(matches!(result, Err(FilesystemError::ReadDir { .. })));
    }
}
