//! JSON problem catalogs: board, tiles, edge conditions and options in one file

use crate::compiler::board::{Board, EdgeCondition};
use crate::compiler::compile::{
    CompileOptions, CompileStage, CompiledModel, ConstraintCompiler, ExclusionScope,
};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{Result, TileError};
use crate::model::objective::Objective;
use crate::solution::render::default_palette;
use crate::vocabulary::tile::{Direction, MatchRule, TileType};
use crate::vocabulary::vocabulary::TileVocabulary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const fn default_true() -> bool {
    true
}

/// Top-level catalog document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Whether cells may stay empty
    #[serde(default = "default_true")]
    pub allow_null_tiles: bool,
    /// Reach of exclusion rules
    #[serde(default)]
    pub exclusion_scope: ScopeSpec,
    /// Objective handed to the solver
    #[serde(default)]
    pub objective: ObjectiveSpec,
    /// Tile definitions
    pub tiles: Vec<TileSpec>,
    /// Cell pins
    #[serde(default)]
    pub edge_conditions: Vec<EdgeSpec>,
}

/// Serialized [`ExclusionScope`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeSpec {
    /// Same-cell exclusion
    #[default]
    Cell,
    /// Board-wide exclusion
    Board,
}

/// Serialized [`Objective`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectiveSpec {
    /// No objective
    #[default]
    Feasibility,
    /// Per-placement tile costs
    TileWeights {
        /// Cost by tile name
        weights: BTreeMap<String, i64>,
    },
    /// Seeded random costs
    Random {
        /// Generator seed, defaulting to the crate default
        #[serde(default)]
        seed: Option<u64>,
    },
}

/// One tile definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileSpec {
    /// Unique tile name
    pub name: String,
    /// Tags carried by the tile
    #[serde(default)]
    pub tags: Vec<String>,
    /// Tags whose tiles are excluded
    #[serde(default)]
    pub exclude_tags: Vec<String>,
    /// Tiles that are excluded
    #[serde(default)]
    pub exclude_tiles: Vec<String>,
    /// Directional match rules
    #[serde(default)]
    pub matches: MatchesSpec,
    /// RGBA colour used when rendering
    #[serde(default)]
    pub color: Option<[u8; 4]>,
}

/// Match rules by direction; absent directions are unconstrained
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchesSpec {
    /// Rule for the right neighbour
    #[serde(default)]
    pub right: Option<MatchSpec>,
    /// Rule for the neighbour below
    #[serde(default)]
    pub down: Option<MatchSpec>,
    /// Rule for the left neighbour
    #[serde(default)]
    pub left: Option<MatchSpec>,
    /// Rule for the neighbour above
    #[serde(default)]
    pub up: Option<MatchSpec>,
}

/// One directional match rule
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchSpec {
    /// Allowed neighbour tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Allowed neighbour tiles
    #[serde(default)]
    pub tiles: Vec<String>,
}

/// One cell pin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    /// Pinned tile name
    pub tile: String,
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
}

/// A catalog resolved into compiler inputs
#[derive(Clone, Debug)]
pub struct Problem {
    /// Board geometry
    pub board: Board,
    /// The tile vocabulary
    pub vocabulary: TileVocabulary,
    /// Cell pins
    pub edge_conditions: Vec<EdgeCondition>,
    /// Compilation options
    pub options: CompileOptions,
    /// Render colour per tile index
    pub palette: Vec<[u8; 4]>,
}

impl Problem {
    /// Compile the problem, reporting stages to `observer`
    ///
    /// # Errors
    ///
    /// Returns an error if any compile-time precondition fails
    pub fn compile_observed(&self, observer: impl FnMut(CompileStage)) -> Result<CompiledModel> {
        ConstraintCompiler::new(&self.vocabulary, self.options.clone()).compile_observed(
            self.board,
            &self.edge_conditions,
            observer,
        )
    }

    /// Compile the problem
    ///
    /// # Errors
    ///
    /// Returns an error if any compile-time precondition fails
    pub fn compile(&self) -> Result<CompiledModel> {
        self.compile_observed(|_| {})
    }
}

impl Catalog {
    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog document
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TileError::FileSystem {
            path: path.to_path_buf(),
            operation: "read catalog",
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| TileError::CatalogParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Serialize the catalog as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the catalog into compiler inputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board dimensions are invalid
    /// - Tile names are duplicated or not identifiers
    pub fn into_problem(self) -> Result<Problem> {
        let board = Board::new(self.width, self.height)?;

        let colors: BTreeMap<String, [u8; 4]> = self
            .tiles
            .iter()
            .filter_map(|tile| tile.color.map(|color| (tile.name.clone(), color)))
            .collect();
        let vocabulary = TileVocabulary::new(self.tiles.into_iter().map(TileSpec::into_tile))?;

        let palette = default_palette(vocabulary.len())
            .into_iter()
            .zip(vocabulary.names())
            .map(|(fallback, name)| colors.get(&name).copied().unwrap_or(fallback))
            .collect();

        let edge_conditions = self
            .edge_conditions
            .into_iter()
            .map(|edge| EdgeCondition::new(edge.tile, edge.x, edge.y))
            .collect();

        let options = CompileOptions {
            allow_null_tiles: self.allow_null_tiles,
            exclusion_scope: match self.exclusion_scope {
                ScopeSpec::Cell => ExclusionScope::Cell,
                ScopeSpec::Board => ExclusionScope::Board,
            },
            objective: match self.objective {
                ObjectiveSpec::Feasibility => Objective::Feasibility,
                ObjectiveSpec::TileWeights { weights } => Objective::TileWeights(weights),
                ObjectiveSpec::Random { seed } => Objective::Random {
                    seed: seed.unwrap_or(DEFAULT_SEED),
                },
            },
        };

        Ok(Problem {
            board,
            vocabulary,
            edge_conditions,
            options,
            palette,
        })
    }
}

impl TileSpec {
    fn into_tile(self) -> TileType {
        let mut tile = TileType::new(self.name)
            .with_tags(self.tags.iter().map(String::as_str))
            .excluding_tags(self.exclude_tags.iter().map(String::as_str))
            .excluding_tiles(self.exclude_tiles);

        let MatchesSpec {
            right,
            down,
            left,
            up,
        } = self.matches;
        for (direction, spec) in Direction::ALL.into_iter().zip([right, down, left, up]) {
            if let Some(spec) = spec {
                let rule = MatchRule::tags(spec.tags.iter().map(String::as_str)).or_tiles(spec.tiles);
                tile = tile.matching(direction, rule);
            }
        }
        tile
    }
}
