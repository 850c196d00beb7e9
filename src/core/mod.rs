//! Core build logic module
//!
//! This module contains the build orchestration for petebuild.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`order`] - Dependency order of the JavaScript sources
//! - [`compress`] - Compression collaborator interface and artifacts
//! - [`build`] - Request validation, artifact naming and orchestration

pub mod build;
pub mod compress;
pub mod order;
