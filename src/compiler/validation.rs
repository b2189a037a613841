//! Precondition checks run before any constraint is emitted

use crate::compiler::board::{Board, EdgeCondition};
use crate::io::error::{Result, TileError};
use crate::vocabulary::vocabulary::TileVocabulary;
use std::collections::BTreeMap;

/// An edge condition resolved against a vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
    /// Index of the pinned tile
    pub tile: usize,
}

/// Check that the vocabulary is non-empty and every tile it references exists
///
/// # Errors
///
/// Returns an error if:
/// - The vocabulary holds no tiles
/// - An exclusion or match rule names a tile outside the vocabulary
pub fn validate_vocabulary(vocabulary: &TileVocabulary) -> Result<()> {
    if vocabulary.is_empty() {
        return Err(TileError::EmptyVocabulary);
    }
    for (_, tile) in vocabulary.iter() {
        for (reference, context) in tile.tile_references() {
            vocabulary.resolve(reference, &context)?;
        }
    }
    Ok(())
}

/// Resolve edge conditions to pins, in first-occurrence order
///
/// Repeating a pin is allowed and collapses to one; pinning one cell to two
/// different tiles is not.
///
/// # Errors
///
/// Returns an error if:
/// - A pinned tile is not in the vocabulary
/// - A pinned cell lies outside the board
/// - Two conditions pin the same cell to different tiles
pub fn resolve_edge_conditions(
    board: &Board,
    vocabulary: &TileVocabulary,
    edge_conditions: &[EdgeCondition],
) -> Result<Vec<Pin>> {
    let mut pins = Vec::with_capacity(edge_conditions.len());
    let mut pinned: BTreeMap<(usize, usize), usize> = BTreeMap::new();

    for condition in edge_conditions {
        let context = format!("edge condition at ({}, {})", condition.x, condition.y);
        let tile = vocabulary.resolve(&condition.tile, &context)?;

        if !board.contains(condition.x, condition.y) {
            return Err(TileError::CellOutOfBounds {
                x: condition.x,
                y: condition.y,
                board: (board.width(), board.height()),
            });
        }

        match pinned.get(&(condition.x, condition.y)) {
            Some(&existing) if existing == tile => {}
            Some(&existing) => {
                let name = |index: usize| {
                    vocabulary
                        .get(index)
                        .map(|t| t.name().to_string())
                        .unwrap_or_default()
                };
                return Err(TileError::ContradictoryEdgeCondition {
                    x: condition.x,
                    y: condition.y,
                    first: name(existing),
                    second: name(tile),
                });
            }
            None => {
                pinned.insert((condition.x, condition.y), tile);
                pins.push(Pin {
                    x: condition.x,
                    y: condition.y,
                    tile,
                });
            }
        }
    }

    Ok(pins)
}
