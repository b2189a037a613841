//! Reading solver results back as tile grids

/// Assignments and decoded grids
pub mod assignment;
/// Text and image rendering
pub mod render;
/// Solver collaborator interface
pub mod solver;

pub use assignment::{Assignment, TileGrid};
pub use solver::{SolveOutcome, Solver, solve_to_grid};
