use log::{debug, info, trace, warn};

use super::{
    assignment::Assignment, clause::Instance, decimation::decimate, evaluator::instance_satisfied,
    observer::ProgressSink, random_source::RandomSource,
};
use crate::config::DriverConfig;
use crate::error::Result;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The walk found an assignment satisfying every clause.
    Satisfied { rounds: usize, assignment: Assignment },
    /// `max_rounds` ran out first.
    Capped { rounds: usize, assignment: Assignment },
}

impl Outcome {
    pub fn rounds(&self) -> usize {
        match self {
            Outcome::Satisfied { rounds, .. } | Outcome::Capped { rounds, .. } => *rounds,
        }
    }

    pub fn assignment(&self) -> &Assignment {
        match self {
            Outcome::Satisfied { assignment, .. } | Outcome::Capped { assignment, .. } => {
                assignment
            }
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Outcome::Satisfied { .. })
    }
}

/// Starts from a uniformly random assignment and decimates every clause, round
/// after round, until the instance is satisfied.
///
/// Without `max_rounds` this may never return.
pub fn perturb_until_satisfied(
    instance: &Instance,
    config: &DriverConfig,
    rng: &mut dyn RandomSource,
    sink: &mut dyn ProgressSink,
) -> Result<Outcome> {
    config.validate()?;
    let assignment = Assignment::random(instance.variables(), rng);
    perturb_from(instance, assignment, config, rng, sink)
}

/// As [`perturb_until_satisfied`], from a given starting assignment.
pub fn perturb_from(
    instance: &Instance,
    mut assignment: Assignment,
    config: &DriverConfig,
    rng: &mut dyn RandomSource,
    sink: &mut dyn ProgressSink,
) -> Result<Outcome> {
    config.validate()?;
    assert_eq!(
        assignment.len(),
        instance.variables(),
        "assignment width must match the instance"
    );
    debug!(
        "walking {} clauses over {} variables from {} with p = {}",
        instance.len(),
        instance.variables(),
        assignment,
        config.probability
    );

    let mut rounds = 0;
    while !instance_satisfied(instance, &assignment) {
        if config.max_rounds.is_some_and(|max| rounds >= max) {
            warn!("gave up after {rounds} rounds at {assignment}");
            return Ok(Outcome::Capped { rounds, assignment });
        }
        rounds += 1;
        // Later clauses see the flips made by earlier ones in the same round.
        for clause in instance.iter() {
            decimate(&mut assignment, clause, config.probability, rng);
        }
        trace!("round {rounds}: {assignment}");
        if config.report_every != 0 && rounds % config.report_every == 0 {
            sink.progress(rounds, &assignment);
        }
    }

    info!("satisfied after {rounds} rounds");
    sink.finished(rounds, &assignment);
    Ok(Outcome::Satisfied { rounds, assignment })
}
