//! Stencil scaffolds a new project directory from a named template:
//! it resolves a template under a configured templates root, copies its file
//! tree into a fresh target directory, and performs literal placeholder
//! substitution on a declared subset of the copied files.

/// Command-line interface module for the stencil application
pub mod cli;

/// Loading of substitution rules files (JSON)
pub mod config;

/// Error types and handling for the stencil application
pub mod error;

/// Project instancing: tree copying and rule application
/// with per-file partial-failure reporting
pub mod instancer;

/// Logger initialization
pub mod logger;

/// Scaffold result inspection and summary formatting
pub mod report;

/// Template enumeration and name resolution
pub mod repository;

/// Literal `{{KEY}}` placeholder replacement
pub mod substitution;
