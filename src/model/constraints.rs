use crate::io::error::{Result, TileError};
use crate::model::expression::{Constraint, ConstraintFamily};
use std::collections::HashMap;

/// Ordered collection of uniquely named constraints
///
/// Emission order is preserved so diagnostics and exported models read the
/// same way on every run.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
    positions: HashMap<String, usize>,
}

impl ConstraintSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constraint
    ///
    /// # Errors
    ///
    /// Returns an error if a constraint with the same name was already added
    pub fn push(&mut self, constraint: Constraint) -> Result<()> {
        if self.positions.contains_key(&constraint.name) {
            return Err(TileError::DuplicateConstraintName {
                name: constraint.name,
            });
        }
        self.positions
            .insert(constraint.name.clone(), self.constraints.len());
        self.constraints.push(constraint);
        Ok(())
    }

    /// Look a constraint up by name
    pub fn get(&self, name: &str) -> Option<&Constraint> {
        self.positions
            .get(name)
            .and_then(|&position| self.constraints.get(position))
    }

    /// Number of constraints
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// True when no constraint was emitted
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterate constraints in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    /// Iterate the constraints of one family
    pub fn family(&self, family: ConstraintFamily) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.family == family)
    }

    /// Number of constraints of one family
    pub fn count(&self, family: ConstraintFamily) -> usize {
        self.family(family).count()
    }
}

impl PartialEq for ConstraintSet {
    fn eq(&self, other: &Self) -> bool {
        self.constraints == other.constraints
    }
}

impl Eq for ConstraintSet {}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
