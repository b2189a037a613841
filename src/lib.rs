//! Compile declarative tile-placement rules into binary integer programs
//!
//! A vocabulary of tile types with tags, exclusion rules and directional match
//! rules is compiled, for a rectangular board and a set of pinned cells, into a
//! cube of 0/1 decision variables plus named linear constraints. Any ILP solver
//! can then satisfy or optimize the model; its answer decodes back into one
//! tile (or none) per cell.

#![forbid(unsafe_code)]

/// Board geometry, validation and the constraint compiler
pub mod compiler;
/// Catalog files, CLI, progress display and error handling
pub mod io;
/// Decision variables, constraints, objectives and LP export
pub mod model;
/// Solver interface and decoding of solved models
pub mod solution;
/// Tags, tile types, vocabularies and tag indices
pub mod vocabulary;

pub use compiler::{Board, CompiledModel, ConstraintCompiler, EdgeCondition, compile};
pub use io::error::{Result, TileError};
pub use vocabulary::{Direction, MatchRule, Tag, TileType, TileVocabulary};
