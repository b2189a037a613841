//! Constraint compilation: vocabulary, board and pins in, solver-ready model out
//!
//! Constraint families are emitted in a fixed order (cardinality, edge
//! conditions, exclusions, adjacency by direction) so that constraint names
//! and exported models are reproducible.

use crate::compiler::board::{Board, EdgeCondition};
use crate::compiler::validation::{Pin, resolve_edge_conditions, validate_vocabulary};
use crate::io::error::Result;
use crate::model::constraints::ConstraintSet;
use crate::model::cube::{DecisionCube, Variable};
use crate::model::expression::{Comparison, Constraint, ConstraintFamily, LinearExpr};
use crate::model::objective::Objective;
use crate::vocabulary::bitset::TileSet;
use crate::vocabulary::tag_index::TagIndex;
use crate::vocabulary::tile::Direction;
use crate::vocabulary::vocabulary::TileVocabulary;

/// How far an exclusion rule reaches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExclusionScope {
    /// Excluded tiles may not share a cell with the excluding tile
    #[default]
    Cell,
    /// Placing the excluding tile anywhere forbids the excluded tiles everywhere
    ///
    /// Emits one big-M row per cell, each spanning every cell of the board, so
    /// the model grows quadratically in the cell count.
    Board,
}

/// Options controlling which constraints are emitted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Whether a cell may hold no tile at all
    pub allow_null_tiles: bool,
    /// Reach of exclusion rules
    pub exclusion_scope: ExclusionScope,
    /// Objective handed to the solver
    pub objective: Objective,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            allow_null_tiles: true,
            exclusion_scope: ExclusionScope::Cell,
            objective: Objective::Feasibility,
        }
    }
}

/// Compilation phases reported to observers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompileStage {
    /// Checking references and edge conditions
    Validate,
    /// Allocating the cube and objective
    Allocate,
    /// Per-cell tile counts
    Cardinality,
    /// Cell pins
    EdgeConditions,
    /// Exclusion rules
    Exclusions,
    /// Directional match rules
    Adjacency,
}

impl CompileStage {
    /// All stages in execution order
    pub const ALL: [Self; 6] = [
        Self::Validate,
        Self::Allocate,
        Self::Cardinality,
        Self::EdgeConditions,
        Self::Exclusions,
        Self::Adjacency,
    ];

    /// Number of stages completed once this stage starts
    pub const fn index(self) -> usize {
        match self {
            Self::Validate => 0,
            Self::Allocate => 1,
            Self::Cardinality => 2,
            Self::EdgeConditions => 3,
            Self::Exclusions => 4,
            Self::Adjacency => 5,
        }
    }

    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Allocate => "allocate",
            Self::Cardinality => "cardinality",
            Self::EdgeConditions => "edge conditions",
            Self::Exclusions => "exclusions",
            Self::Adjacency => "adjacency",
        }
    }
}

/// A fully constrained model ready for a solver
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledModel {
    board: Board,
    cube: DecisionCube,
    constraints: ConstraintSet,
    objective: Option<LinearExpr>,
    tile_names: Vec<String>,
    allow_null_tiles: bool,
}

impl CompiledModel {
    /// Board the model was compiled for
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The decision variables
    pub const fn cube(&self) -> &DecisionCube {
        &self.cube
    }

    /// All emitted constraints in emission order
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Expression to minimise, if any
    pub const fn objective(&self) -> Option<&LinearExpr> {
        self.objective.as_ref()
    }

    /// Tile names in index order
    pub fn tile_names(&self) -> &[String] {
        &self.tile_names
    }

    /// Whether cells may stay empty
    pub const fn allow_null_tiles(&self) -> bool {
        self.allow_null_tiles
    }

    /// Split into the cube and its constraints
    pub fn into_parts(self) -> (DecisionCube, ConstraintSet) {
        (self.cube, self.constraints)
    }
}

/// Compiles boards against one vocabulary
///
/// The tag index is built once here and reused for every board compiled.
#[derive(Debug)]
pub struct ConstraintCompiler<'a> {
    vocabulary: &'a TileVocabulary,
    tag_index: TagIndex,
    options: CompileOptions,
}

impl<'a> ConstraintCompiler<'a> {
    /// Create a compiler for a vocabulary
    pub fn new(vocabulary: &'a TileVocabulary, options: CompileOptions) -> Self {
        Self {
            vocabulary,
            tag_index: TagIndex::new(vocabulary),
            options,
        }
    }

    /// Options used for every compilation
    pub const fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// The vocabulary's tag index
    pub const fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    /// Tiles excluded by a tile, never including the tile itself
    ///
    /// # Errors
    ///
    /// Returns an error if an excluded tile is not in the vocabulary
    pub fn exclusion_set(&self, tile: usize) -> Result<TileSet> {
        let Some(tile_type) = self.vocabulary.get(tile) else {
            return Ok(TileSet::new(self.vocabulary.len()));
        };
        let context = format!("exclude_tiles of '{}'", tile_type.name());
        let mut set = self.tag_index.resolve(tile_type.exclude_tags());
        set.union_with(
            &self
                .vocabulary
                .resolve_all(tile_type.exclude_tiles(), &context)?,
        );
        set.remove(tile);
        Ok(set)
    }

    /// Tiles allowed next to a tile in a direction, `None` when unconstrained
    ///
    /// # Errors
    ///
    /// Returns an error if the rule names a tile outside the vocabulary
    pub fn allowed_neighbors(&self, tile: usize, direction: Direction) -> Result<Option<TileSet>> {
        let Some(tile_type) = self.vocabulary.get(tile) else {
            return Ok(None);
        };
        let Some(rule) = tile_type.match_rule(direction).filter(|r| !r.is_empty()) else {
            return Ok(None);
        };
        let context = format!("{direction} match rule of '{}'", tile_type.name());
        let mut set = self.tag_index.resolve(&rule.tags);
        set.union_with(&self.vocabulary.resolve_all(&rule.tiles, &context)?);
        Ok(Some(set))
    }

    /// Compile a board with its edge conditions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The vocabulary is empty or references unknown tiles
    /// - An edge condition is unknown, off the board or contradicts another
    /// - The objective references unknown tiles
    pub fn compile(&self, board: Board, edge_conditions: &[EdgeCondition]) -> Result<CompiledModel> {
        self.compile_observed(board, edge_conditions, |_| {})
    }

    /// Compile a board, reporting each stage to `observer` as it starts
    ///
    /// All validation happens before the first constraint is emitted; an
    /// error never leaves a partial model behind.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ConstraintCompiler::compile`]
    pub fn compile_observed(
        &self,
        board: Board,
        edge_conditions: &[EdgeCondition],
        mut observer: impl FnMut(CompileStage),
    ) -> Result<CompiledModel> {
        observer(CompileStage::Validate);
        validate_vocabulary(self.vocabulary)?;
        let pins = resolve_edge_conditions(&board, self.vocabulary, edge_conditions)?;
        let tile_count = self.vocabulary.len();
        let exclusions = (0..tile_count)
            .map(|tile| self.exclusion_set(tile))
            .collect::<Result<Vec<_>>>()?;
        let mut neighbors = Vec::with_capacity(tile_count * Direction::ALL.len());
        for direction in Direction::ALL {
            for tile in 0..tile_count {
                if let Some(allowed) = self.allowed_neighbors(tile, direction)? {
                    neighbors.push((direction, tile, allowed));
                }
            }
        }

        observer(CompileStage::Allocate);
        let cube = DecisionCube::new(board.width(), board.height(), tile_count);
        let objective = self.options.objective.build(&cube, self.vocabulary)?;
        let mut constraints = ConstraintSet::new();

        observer(CompileStage::Cardinality);
        self.emit_cardinality(&board, &cube, &mut constraints)?;

        observer(CompileStage::EdgeConditions);
        emit_edge_conditions(&pins, &cube, &mut constraints)?;

        observer(CompileStage::Exclusions);
        for (tile, excluded) in exclusions.iter().enumerate() {
            if excluded.is_empty() {
                continue;
            }
            match self.options.exclusion_scope {
                ExclusionScope::Cell => {
                    self.emit_cell_exclusion(&board, &cube, tile, excluded, &mut constraints)?;
                }
                ExclusionScope::Board => {
                    self.emit_board_exclusion(&board, &cube, tile, excluded, &mut constraints)?;
                }
            }
        }

        observer(CompileStage::Adjacency);
        for (direction, tile, allowed) in &neighbors {
            self.emit_adjacency(&board, &cube, *direction, *tile, allowed, &mut constraints)?;
        }

        Ok(CompiledModel {
            board,
            cube,
            constraints,
            objective,
            tile_names: self.vocabulary.names(),
            allow_null_tiles: self.options.allow_null_tiles,
        })
    }

    fn tile_name(&self, tile: usize) -> &str {
        self.vocabulary.get(tile).map_or("", |t| t.name())
    }

    fn emit_cardinality(
        &self,
        board: &Board,
        cube: &DecisionCube,
        constraints: &mut ConstraintSet,
    ) -> Result<()> {
        let comparison = if self.options.allow_null_tiles {
            Comparison::LessEqual
        } else {
            Comparison::Equal
        };
        for (x, y) in board.cells() {
            let expr = LinearExpr::sum(cube.cell(x, y).into_iter().flatten().copied());
            constraints.push(Constraint::new(
                format!("Cardinality_{x}_{y}"),
                ConstraintFamily::Cardinality,
                expr,
                comparison,
                1,
            ))?;
        }
        Ok(())
    }

    fn emit_cell_exclusion(
        &self,
        board: &Board,
        cube: &DecisionCube,
        tile: usize,
        excluded: &TileSet,
        constraints: &mut ConstraintSet,
    ) -> Result<()> {
        let name = self.tile_name(tile);
        for (x, y) in board.cells() {
            let mut expr = LinearExpr::sum(cube.variable(x, y, tile));
            expr.add_all(cell_variables(cube, x, y, excluded), 1);
            constraints.push(Constraint::new(
                format!("Exclusion_{name}_{x}_{y}"),
                ConstraintFamily::Exclusion,
                expr,
                Comparison::LessEqual,
                1,
            ))?;
        }
        Ok(())
    }

    fn emit_board_exclusion(
        &self,
        board: &Board,
        cube: &DecisionCube,
        tile: usize,
        excluded: &TileSet,
        constraints: &mut ConstraintSet,
    ) -> Result<()> {
        let name = self.tile_name(tile);
        // Each cell holds at most one tile, so the excluded sum never exceeds the cell count
        let big_m = board.cell_count() as i64;
        let everywhere: Vec<Variable> = board
            .cells()
            .flat_map(|(x, y)| cell_variables(cube, x, y, excluded))
            .collect();

        for (x, y) in board.cells() {
            let mut expr = LinearExpr::new();
            if let Some(variable) = cube.variable(x, y, tile) {
                expr.add_term(variable, big_m);
            }
            expr.add_all(everywhere.iter().copied(), 1);
            constraints.push(Constraint::new(
                format!("BoardExclusion_{name}_{x}_{y}"),
                ConstraintFamily::Exclusion,
                expr,
                Comparison::LessEqual,
                big_m,
            ))?;
        }
        Ok(())
    }

    fn emit_adjacency(
        &self,
        board: &Board,
        cube: &DecisionCube,
        direction: Direction,
        tile: usize,
        allowed: &TileSet,
        constraints: &mut ConstraintSet,
    ) -> Result<()> {
        let name = self.tile_name(tile);
        for (x, y) in board.cells() {
            // Cells facing the board edge rely on edge conditions alone
            let Some((nx, ny)) = board.neighbor(x, y, direction) else {
                continue;
            };
            let mut expr = LinearExpr::sum(cube.variable(x, y, tile));
            expr.add_all(cell_variables(cube, nx, ny, allowed), -1);
            constraints.push(Constraint::new(
                format!("Match{direction}_{name}_{x}_{y}"),
                ConstraintFamily::Adjacency(direction),
                expr,
                Comparison::LessEqual,
                0,
            ))?;
        }
        Ok(())
    }
}

fn emit_edge_conditions(
    pins: &[Pin],
    cube: &DecisionCube,
    constraints: &mut ConstraintSet,
) -> Result<()> {
    for pin in pins {
        constraints.push(Constraint::new(
            format!("EdgeCondition_{}_{}", pin.x, pin.y),
            ConstraintFamily::EdgeCondition,
            LinearExpr::sum(cube.variable(pin.x, pin.y, pin.tile)),
            Comparison::Equal,
            1,
        ))?;
    }
    Ok(())
}

fn cell_variables<'c>(
    cube: &'c DecisionCube,
    x: usize,
    y: usize,
    tiles: &'c TileSet,
) -> impl Iterator<Item = Variable> + 'c {
    tiles.iter().filter_map(move |tile| cube.variable(x, y, tile))
}

/// Compile a board with default options apart from `allow_null_tiles`
///
/// # Errors
///
/// Returns an error if the board dimensions are invalid or any precondition
/// checked by [`ConstraintCompiler::compile`] fails
pub fn compile(
    width: usize,
    height: usize,
    vocabulary: &TileVocabulary,
    edge_conditions: &[EdgeCondition],
    allow_null_tiles: bool,
) -> Result<CompiledModel> {
    let board = Board::new(width, height)?;
    let options = CompileOptions {
        allow_null_tiles,
        ..CompileOptions::default()
    };
    ConstraintCompiler::new(vocabulary, options).compile(board, edge_conditions)
}
