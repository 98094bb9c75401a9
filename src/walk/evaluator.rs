use super::{
    assignment::Assignment,
    clause::{Clause, Instance},
};

pub fn clause_satisfied(clause: &Clause, assignment: &Assignment) -> bool {
    clause.is_satisfied_by(assignment)
}

pub fn instance_satisfied(instance: &Instance, assignment: &Assignment) -> bool {
    instance
        .iter()
        .all(|clause| clause_satisfied(clause, assignment))
}

/// Index of the first clause the assignment violates, if any.
pub fn first_unsatisfied(instance: &Instance, assignment: &Assignment) -> Option<usize> {
    instance
        .iter()
        .position(|clause| !clause_satisfied(clause, assignment))
}
