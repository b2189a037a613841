//! Interface to the external ILP solver collaborator

use crate::compiler::compile::CompiledModel;
use crate::io::error::{Result, invalid_solution};
use crate::solution::assignment::{Assignment, TileGrid};

/// Result of handing a model to a solver
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A 0/1 value for every variable
    Solved(Assignment),
    /// The model has no satisfying assignment
    Infeasible,
}

/// A black-box binary integer program solver
///
/// Implementations translate the model into their native form, solve it and
/// report either an assignment or infeasibility. Infeasibility is a normal
/// outcome, not an error.
pub trait Solver {
    /// Solve a compiled model
    ///
    /// # Errors
    ///
    /// Returns an error if the solver itself fails to run
    fn solve(&mut self, model: &CompiledModel) -> Result<SolveOutcome>;
}

/// Solve a model and read the resulting tile grid
///
/// The assignment is checked against every constraint before decoding, so a
/// misbehaving solver cannot produce a grid that breaks the rules.
///
/// # Errors
///
/// Returns an error if the solver fails, or its assignment violates a
/// constraint or cannot be decoded
pub fn solve_to_grid<S: Solver + ?Sized>(
    solver: &mut S,
    model: &CompiledModel,
) -> Result<Option<TileGrid>> {
    match solver.solve(model)? {
        SolveOutcome::Infeasible => Ok(None),
        SolveOutcome::Solved(assignment) => verified_grid(&assignment, model).map(Some),
    }
}

/// Decode an assignment after checking it satisfies every constraint
///
/// # Errors
///
/// Returns an error naming the violated constraints, or if decoding fails
pub fn verified_grid(assignment: &Assignment, model: &CompiledModel) -> Result<TileGrid> {
    let violations = assignment.violations(model.constraints());
    if !violations.is_empty() {
        let names: Vec<&str> = violations.iter().map(|c| c.name.as_str()).collect();
        return Err(invalid_solution(&format!(
            "{} constraint(s) violated: {}",
            names.len(),
            names.join(", ")
        )));
    }
    assignment.decode(model)
}
