//! Compilation of tile rules into constraints
//!
//! This module contains:
//! - Board geometry and edge conditions
//! - Precondition checks
//! - The constraint compiler itself

/// Board geometry and cell pins
pub mod board;
/// The constraint compiler
pub mod compile;
/// Precondition checks
pub mod validation;

pub use board::{Board, EdgeCondition};
pub use compile::{
    CompileOptions, CompileStage, CompiledModel, ConstraintCompiler, ExclusionScope, compile,
};
