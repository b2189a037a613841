//! The decision variable cube: one binary variable per (cell, tile type)

use crate::io::configuration::VARIABLE_PREFIX;
use ndarray::{Array3, ArrayView1, Axis};
use std::fmt;

/// Handle to one binary decision variable
///
/// Wraps the variable's flat index `(x * height + y) * tiles + tile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(usize);

impl Variable {
    /// Flat index of the variable within its cube
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Dense 3-D array of decision variables indexed `[x, y, tile]`
///
/// Standard (row-major) layout makes the ndarray offset of `[x, y, t]` equal
/// to the variable's flat index, so cell slices are contiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionCube {
    variables: Array3<Variable>,
}

impl DecisionCube {
    /// Allocate variables for every cell and tile type
    pub fn new(width: usize, height: usize, tile_count: usize) -> Self {
        let variables = Array3::from_shape_fn((width, height, tile_count), |(x, y, t)| {
            Variable((x * height + y) * tile_count + t)
        });
        Self { variables }
    }

    /// Board width
    pub fn width(&self) -> usize {
        self.variables.dim().0
    }

    /// Board height
    pub fn height(&self) -> usize {
        self.variables.dim().1
    }

    /// Number of tile types
    pub fn tile_count(&self) -> usize {
        self.variables.dim().2
    }

    /// Cube shape `(width, height, tiles)`
    pub fn dim(&self) -> (usize, usize, usize) {
        self.variables.dim()
    }

    /// Total number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when the cube holds no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variable for a tile at a cell
    pub fn variable(&self, x: usize, y: usize, tile: usize) -> Option<Variable> {
        self.variables.get((x, y, tile)).copied()
    }

    /// All tile variables of one cell in tile order
    pub fn cell(&self, x: usize, y: usize) -> Option<ArrayView1<'_, Variable>> {
        (x < self.width() && y < self.height()).then(|| {
            self.variables
                .index_axis(Axis(0), x)
                .index_axis_move(Axis(0), y)
        })
    }

    /// The `(x, y, tile)` coordinates of a variable
    pub fn coordinates(&self, variable: Variable) -> Option<(usize, usize, usize)> {
        let (width, height, tiles) = self.dim();
        if variable.0 >= self.len() || tiles == 0 {
            return None;
        }
        let tile = variable.0 % tiles;
        let cell = variable.0 / tiles;
        let (x, y) = (cell / height, cell % height);
        (x < width).then_some((x, y, tile))
    }

    /// Solver-facing name of a variable, `TileField_{x}_{y}_{tile}`
    pub fn name(&self, variable: Variable) -> Option<String> {
        self.coordinates(variable)
            .map(|(x, y, tile)| format!("{VARIABLE_PREFIX}_{x}_{y}_{tile}"))
    }

    /// Look a variable up by its solver-facing name
    pub fn parse_name(&self, name: &str) -> Option<Variable> {
        let mut parts = name.strip_prefix(VARIABLE_PREFIX)?.strip_prefix('_')?.split('_');
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        let tile = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        self.variable(x, y, tile)
    }

    /// Iterate all variables in flat index order
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        self.variables.iter().copied()
    }
}
