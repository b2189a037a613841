//! The compiled integer program: variables, constraints, objective and export

/// Named constraint collections
pub mod constraints;
/// Decision variable cube
pub mod cube;
/// Linear expressions and constraints
pub mod expression;
/// LP file export
pub mod lp;
/// Minimisation objectives
pub mod objective;

pub use constraints::ConstraintSet;
pub use cube::{DecisionCube, Variable};
pub use expression::{Comparison, Constraint, ConstraintFamily, LinearExpr};
pub use objective::Objective;
