//! Optional minimisation objectives over the decision cube

use crate::io::configuration::RANDOM_WEIGHT_LIMIT;
use crate::io::error::Result;
use crate::model::cube::DecisionCube;
use crate::model::expression::LinearExpr;
use crate::vocabulary::vocabulary::TileVocabulary;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;

/// What the solver should minimise once the constraints are met
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Objective {
    /// Any feasible assignment will do
    #[default]
    Feasibility,
    /// Per-placement cost of each named tile; unnamed tiles cost nothing
    TileWeights(BTreeMap<String, i64>),
    /// Seeded random cost per variable, to vary solutions between seeds
    Random {
        /// Seed of the coefficient generator
        seed: u64,
    },
}

impl Objective {
    /// Build the minimisation expression, or `None` for pure feasibility
    ///
    /// Random coefficients are drawn in flat variable order, so a seed always
    /// reproduces the same objective for the same cube.
    ///
    /// # Errors
    ///
    /// Returns an error if a tile weight names a tile outside the vocabulary
    pub fn build(
        &self,
        cube: &DecisionCube,
        vocabulary: &TileVocabulary,
    ) -> Result<Option<LinearExpr>> {
        match self {
            Self::Feasibility => Ok(None),
            Self::TileWeights(weights) => {
                let mut per_tile = vec![0; vocabulary.len()];
                for (name, &weight) in weights {
                    let index = vocabulary.resolve(name, "objective tile weights")?;
                    if let Some(slot) = per_tile.get_mut(index) {
                        *slot = weight;
                    }
                }
                let mut expr = LinearExpr::new();
                for variable in cube.iter() {
                    let weight = cube
                        .coordinates(variable)
                        .and_then(|(_, _, tile)| per_tile.get(tile).copied())
                        .unwrap_or(0);
                    if weight != 0 {
                        expr.add_term(variable, weight);
                    }
                }
                Ok(Some(expr))
            }
            Self::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                let mut expr = LinearExpr::new();
                for variable in cube.iter() {
                    expr.add_term(variable, rng.random_range(0..RANDOM_WEIGHT_LIMIT));
                }
                Ok(Some(expr))
            }
        }
    }
}
