//! Linear expressions and named constraints over decision variables

use crate::model::cube::Variable;
use crate::vocabulary::tile::Direction;
use std::fmt;

/// Integer-weighted sum of decision variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearExpr {
    terms: Vec<(Variable, i64)>,
}

impl LinearExpr {
    /// The empty sum
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Sum of variables, each with coefficient 1
    pub fn sum(variables: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            terms: variables.into_iter().map(|v| (v, 1)).collect(),
        }
    }

    /// Append a term
    pub fn add_term(&mut self, variable: Variable, coefficient: i64) {
        self.terms.push((variable, coefficient));
    }

    /// Append every variable with the same coefficient
    pub fn add_all(&mut self, variables: impl IntoIterator<Item = Variable>, coefficient: i64) {
        self.terms
            .extend(variables.into_iter().map(|v| (v, coefficient)));
    }

    /// Terms in insertion order
    pub fn terms(&self) -> &[(Variable, i64)] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the expression has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Value of the expression under a 0/1 valuation
    pub fn evaluate(&self, value: impl Fn(Variable) -> bool) -> i64 {
        self.terms
            .iter()
            .filter(|(variable, _)| value(*variable))
            .map(|(_, coefficient)| coefficient)
            .sum()
    }
}

/// Relation between a constraint's expression and its bound
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `expr <= bound`
    LessEqual,
    /// `expr = bound`
    Equal,
    /// `expr >= bound`
    GreaterEqual,
}

impl Comparison {
    /// Operator as written in LP files
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LessEqual => "<=",
            Self::Equal => "=",
            Self::GreaterEqual => ">=",
        }
    }

    /// Test the relation for concrete values
    pub const fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::LessEqual => lhs <= rhs,
            Self::Equal => lhs == rhs,
            Self::GreaterEqual => lhs >= rhs,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The rule family a constraint was emitted for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintFamily {
    /// At most (or exactly) one tile per cell
    Cardinality,
    /// A cell pinned to a tile
    EdgeCondition,
    /// Tiles that may not co-occur
    Exclusion,
    /// Neighbour compatibility in one direction
    Adjacency(Direction),
}

impl fmt::Display for ConstraintFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardinality => f.write_str("cardinality"),
            Self::EdgeCondition => f.write_str("edge condition"),
            Self::Exclusion => f.write_str("exclusion"),
            Self::Adjacency(direction) => write!(f, "adjacency ({direction})"),
        }
    }
}

/// A named linear constraint `expr (<=|=|>=) bound`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    /// Unique name, reported by solvers on infeasibility
    pub name: String,
    /// Rule family the constraint belongs to
    pub family: ConstraintFamily,
    /// Left-hand side
    pub expr: LinearExpr,
    /// Relation to the bound
    pub comparison: Comparison,
    /// Right-hand side
    pub bound: i64,
}

impl Constraint {
    /// Create a constraint
    pub fn new(
        name: impl Into<String>,
        family: ConstraintFamily,
        expr: LinearExpr,
        comparison: Comparison,
        bound: i64,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            expr,
            comparison,
            bound,
        }
    }

    /// Test the constraint under a 0/1 valuation
    pub fn is_satisfied(&self, value: impl Fn(Variable) -> bool) -> bool {
        self.comparison.holds(self.expr.evaluate(value), self.bound)
    }
}
