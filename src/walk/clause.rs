use std::fmt;

use super::{assignment::Assignment, literal::Literal};

/// A disjunction of exactly three literals.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clause {
    pub literals: [Literal; 3],
}

impl Clause {
    pub fn new(literals: [Literal; 3]) -> Clause {
        Clause { literals }
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.literals
            .iter()
            .any(|lit| lit.is_satisfied_by(assignment))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.literals.iter()).finish()
    }
}

/// The ordered clause list of one problem together with its variable count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    variables: usize,
    clauses: Vec<Clause>,
}

impl Instance {
    /// Panics if a clause mentions a variable outside `0..variables`.
    pub fn new(variables: usize, clauses: Vec<Clause>) -> Instance {
        for clause in &clauses {
            for lit in clause.iter() {
                assert!(
                    lit.variable < variables,
                    "literal {lit:?} out of range for {variables} variables"
                );
            }
        }
        Instance { variables, clauses }
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}
