//! Input/output: catalogs, solution files, CLI, progress and error handling

/// JSON problem catalogs
pub mod catalog;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display
pub mod progress;
/// Solver solution listings
pub mod solution_file;
