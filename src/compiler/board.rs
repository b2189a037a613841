//! Board geometry and cell pins

use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, TileError};
use crate::vocabulary::tile::Direction;

/// Rectangular grid of `width x height` cells addressed `(x, y)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
}

impl Board {
    /// Create a board
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_BOARD_DIMENSION`]
    pub const fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_BOARD_DIMENSION || height > MAX_BOARD_DIMENSION
        {
            return Err(TileError::InvalidBoardDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// True when the cell lies on the board
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The neighbouring cell in a direction, if it lies on the board
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.delta();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.contains(nx, ny).then_some((nx, ny))
    }

    /// Iterate cells column by column, matching the cube's variable layout
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }
}

/// Pins cell `(x, y)` to the named tile
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeCondition {
    /// Name of the pinned tile
    pub tile: String,
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
}

impl EdgeCondition {
    /// Create an edge condition
    pub fn new(tile: impl Into<String>, x: usize, y: usize) -> Self {
        Self {
            tile: tile.into(),
            x,
            y,
        }
    }
}
