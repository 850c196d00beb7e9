//! Infrastructure layer
//!
//! Handles all I/O operations: the filesystem and the minifiers.
//! This module is the only place where side effects occur.

pub mod filesystem;
pub mod minify;
