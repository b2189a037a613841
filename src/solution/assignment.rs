//! Solver assignments and their decoding into tile grids

use crate::compiler::compile::CompiledModel;
use crate::io::error::{Result, invalid_solution};
use crate::model::constraints::ConstraintSet;
use crate::model::cube::{DecisionCube, Variable};
use crate::model::expression::Constraint;
use ndarray::{Array2, Array3};

/// A 0/1 value for every variable of a decision cube
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    values: Array3<bool>,
}

impl Assignment {
    /// All-zero assignment shaped like the cube
    pub fn new(cube: &DecisionCube) -> Self {
        Self {
            values: Array3::from_elem(cube.dim(), false),
        }
    }

    /// Assignment placing the grid's tiles and nothing else
    pub fn from_grid(cube: &DecisionCube, grid: &TileGrid) -> Self {
        let mut assignment = Self::new(cube);
        for ((x, y), tile) in grid.tiles.indexed_iter() {
            if let Some(variable) = tile.and_then(|t| cube.variable(x, y, t)) {
                assignment.set(variable, true);
            }
        }
        assignment
    }

    /// Read solver output given as `(variable name, value)` pairs
    ///
    /// Values above one half count as 1. Names that are not cube variables,
    /// such as solver auxiliaries, are skipped.
    pub fn from_named_values<'a>(
        cube: &DecisionCube,
        values: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Self {
        let mut assignment = Self::new(cube);
        for (name, value) in values {
            if let Some(variable) = cube.parse_name(name) {
                assignment.set(variable, value > 0.5);
            }
        }
        assignment
    }

    /// Set one variable
    pub fn set(&mut self, variable: Variable, value: bool) {
        if let Some(slot) = self
            .values
            .as_slice_mut()
            .and_then(|values| values.get_mut(variable.index()))
        {
            *slot = value;
        }
    }

    /// Value of one variable; unknown variables read as 0
    pub fn value(&self, variable: Variable) -> bool {
        self.values
            .as_slice()
            .and_then(|values| values.get(variable.index()))
            .copied()
            .unwrap_or(false)
    }

    /// Number of variables set to 1
    pub fn ones(&self) -> usize {
        self.values.iter().filter(|&&value| value).count()
    }

    /// Constraints the assignment breaks, in emission order
    pub fn violations<'c>(&self, constraints: &'c ConstraintSet) -> Vec<&'c Constraint> {
        constraints
            .iter()
            .filter(|constraint| !constraint.is_satisfied(|v| self.value(v)))
            .collect()
    }

    /// Read the tile placed in each cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The assignment is shaped for a different cube
    /// - A cell holds more than one tile
    /// - A cell is empty although the model forbids empty cells
    pub fn decode(&self, model: &CompiledModel) -> Result<TileGrid> {
        let cube = model.cube();
        if self.values.dim() != cube.dim() {
            return Err(invalid_solution(&format!(
                "assignment shape {:?} does not match cube shape {:?}",
                self.values.dim(),
                cube.dim()
            )));
        }

        let mut grid = TileGrid::new(cube.width(), cube.height(), model.tile_names().to_vec());
        for (x, y) in model.board().cells() {
            let mut placed = cube
                .cell(x, y)
                .into_iter()
                .flatten()
                .enumerate()
                .filter(|&(_, &variable)| self.value(variable))
                .map(|(tile, _)| tile);
            let tile = placed.next();
            if placed.next().is_some() {
                return Err(invalid_solution(&format!(
                    "cell ({x}, {y}) holds more than one tile"
                )));
            }
            if tile.is_none() && !model.allow_null_tiles() {
                return Err(invalid_solution(&format!(
                    "cell ({x}, {y}) is empty but empty cells are not allowed"
                )));
            }
            grid.set(x, y, tile);
        }
        Ok(grid)
    }
}

/// The tile placed in each cell of a board, indexed `[x, y]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Array2<Option<usize>>,
    tile_names: Vec<String>,
}

impl TileGrid {
    /// Empty grid over the given tile names
    pub fn new(width: usize, height: usize, tile_names: Vec<String>) -> Self {
        Self {
            tiles: Array2::from_elem((width, height), None),
            tile_names,
        }
    }

    /// Board width
    pub fn width(&self) -> usize {
        self.tiles.nrows()
    }

    /// Board height
    pub fn height(&self) -> usize {
        self.tiles.ncols()
    }

    /// Place a tile, or clear the cell with `None`
    pub fn set(&mut self, x: usize, y: usize, tile: Option<usize>) {
        if let Some(cell) = self.tiles.get_mut((x, y)) {
            *cell = tile;
        }
    }

    /// Tile index at a cell, `None` when empty or off the board
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        self.tiles.get((x, y)).copied().flatten()
    }

    /// Tile name at a cell
    pub fn name_at(&self, x: usize, y: usize) -> Option<&str> {
        self.get(x, y)
            .and_then(|tile| self.tile_names.get(tile))
            .map(String::as_str)
    }

    /// Tile names in index order
    pub fn tile_names(&self) -> &[String] {
        &self.tile_names
    }

    /// Number of cells holding a tile
    pub fn count(&self, tile: usize) -> usize {
        self.tiles.iter().filter(|&&cell| cell == Some(tile)).count()
    }

    /// Number of empty cells
    pub fn empty_cells(&self) -> usize {
        self.tiles.iter().filter(|cell| cell.is_none()).count()
    }
}
