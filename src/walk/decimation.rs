use super::{assignment::Assignment, clause::Clause, random_source::RandomSource};

/// One repair attempt on `clause`.
///
/// A satisfied clause is left alone. Otherwise each of its literals is toggled
/// with independent probability `p`. A variable shared by several unsatisfied
/// clauses may be toggled once per clause within the same round.
pub fn decimate(assignment: &mut Assignment, clause: &Clause, p: f64, rng: &mut dyn RandomSource) {
    if clause.is_satisfied_by(assignment) {
        return;
    }
    for lit in clause.iter() {
        if rng.chance(p) {
            assignment.flip(lit.variable);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::literal::Literal;
    use crate::walk::random_source::{MockRandomSource, RngSource};
    use mockall::predicate::*;

    fn all_negative() -> Clause {
        Clause::new([
            Literal::negative(0),
            Literal::negative(2),
            Literal::negative(3),
        ])
    }

    #[test]
    fn satisfied_clause_draws_nothing() {
        let mut rng = MockRandomSource::new();
        rng.expect_chance().never();

        let mut assignment = Assignment::all_false(4);
        decimate(&mut assignment, &all_negative(), 0.5, &mut rng);
        assert_eq!(assignment, Assignment::all_false(4));
    }

    #[test]
    fn p_zero_never_flips() {
        let mut rng = RngSource::seeded(3);
        let mut assignment = Assignment::from(vec![true; 4]);
        for _ in 0..1000 {
            decimate(&mut assignment, &all_negative(), 0.0, &mut rng);
        }
        assert_eq!(assignment, Assignment::from(vec![true; 4]));
    }

    #[test]
    fn p_one_flips_every_literal_once() {
        let mut rng = RngSource::seeded(3);
        let mut assignment = Assignment::from(vec![true; 4]);
        decimate(&mut assignment, &all_negative(), 1.0, &mut rng);
        assert_eq!(assignment.as_slice(), &[false, true, false, false]);
    }

    #[test]
    fn coin_per_literal_is_independent() {
        let mut rng = MockRandomSource::new();
        let mut draws = vec![true, false, true].into_iter();
        rng.expect_chance()
            .with(eq(0.25))
            .times(3)
            .returning(move |_| draws.next().unwrap());

        let mut assignment = Assignment::from(vec![true; 4]);
        decimate(&mut assignment, &all_negative(), 0.25, &mut rng);
        assert_eq!(assignment.as_slice(), &[false, true, true, false]);
    }

    #[test]
    fn repeated_variable_toggles_twice() {
        let clause = Clause::new([
            Literal::negative(1),
            Literal::negative(1),
            Literal::negative(0),
        ]);
        let mut rng = RngSource::seeded(9);
        let mut assignment = Assignment::from(vec![true, true]);
        decimate(&mut assignment, &clause, 1.0, &mut rng);
        assert_eq!(assignment.as_slice(), &[false, true]);
    }
}
