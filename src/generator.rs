//! The adversarial instance family.
//!
//! All-false is the only intended solution. Three groups of clauses build it:
//!
//! 1. Seed: every pattern on `a, b, c` other than all-false is forbidden.
//! 2. Chain: a variable must be false if the two before it are false.
//! 3. Reset: whenever `a, b` leave the seed pattern, every later variable is
//!    pushed towards true. Each such push is weak, but together they outweigh
//!    the chain's attempt to repair any single variable.

use log::debug;

use crate::error::{Error, Result};
use crate::walk::{first_unsatisfied, Assignment, Clause, Instance, Literal};

const SEED_CLAUSES: usize = 7;

fn ya(i: usize) -> Literal {
    Literal::positive(i)
}

fn no(i: usize) -> Literal {
    Literal::negative(i)
}

/// Number of clauses in `evil_3sat_instance(n)`.
pub fn clause_count(n: usize) -> usize {
    SEED_CLAUSES + 4 * n.saturating_sub(3)
}

pub fn evil_3sat_instance(n: usize) -> Result<Instance> {
    if n < 3 {
        return Err(Error::TooFewVariables(n));
    }
    let mut clauses = Vec::with_capacity(clause_count(n));

    clauses.extend([
        Clause::new([no(0), ya(1), ya(2)]),
        Clause::new([no(0), ya(1), no(2)]),
        Clause::new([no(0), no(1), ya(2)]),
        Clause::new([no(0), no(1), no(2)]),
        Clause::new([ya(0), no(1), no(2)]),
        Clause::new([ya(0), no(1), ya(2)]),
        Clause::new([ya(0), ya(1), no(2)]),
    ]);

    clauses.extend((0..n - 3).map(|i| Clause::new([ya(i + 1), ya(i + 2), no(i + 3)])));

    for k in 0..n - 3 {
        clauses.push(Clause::new([no(0), no(1), ya(k + 3)]));
        clauses.push(Clause::new([no(0), ya(1), ya(k + 3)]));
        clauses.push(Clause::new([ya(0), no(1), ya(k + 3)]));
    }

    debug!("generated {} clauses over {} variables", clauses.len(), n);
    Ok(Instance::new(n, clauses))
}

/// Fails with the first clause the all-false assignment violates.
pub fn check_all_false_solution(instance: &Instance) -> Result<()> {
    let all_false = Assignment::all_false(instance.variables());
    match first_unsatisfied(instance, &all_false) {
        None => Ok(()),
        Some(clause) => Err(Error::SeedNotSatisfied {
            clause,
            rendered: instance.clauses()[clause].to_string(),
        }),
    }
}
