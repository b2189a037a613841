//! Reading solver solution listings back into assignments
//!
//! Solvers print solutions in slightly different layouts (`name value`,
//! `index name value reduced-cost`, trailing objective annotations). Every
//! line is scanned for the first token naming a cube variable; the next
//! numeric token is its value. Everything else is ignored.

use crate::io::error::{Result, TileError};
use crate::model::cube::DecisionCube;
use crate::solution::assignment::Assignment;
use std::path::Path;

/// Parse solution text against a cube
pub fn parse_solution(cube: &DecisionCube, text: &str) -> Assignment {
    let values = text.lines().filter_map(|line| {
        let mut tokens = line.split_whitespace();
        let name = tokens.find(|token| cube.parse_name(token).is_some())?;
        let value = tokens.find_map(|token| token.parse::<f64>().ok())?;
        Some((name, value))
    });
    Assignment::from_named_values(cube, values)
}

/// Read a solution file against a cube
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn read_solution(cube: &DecisionCube, path: &Path) -> Result<Assignment> {
    let text = std::fs::read_to_string(path).map_err(|e| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "read solution",
        source: e,
    })?;
    Ok(parse_solution(cube, &text))
}
