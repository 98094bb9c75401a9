use std::io::Write;

use log::warn;
use mockall::automock;

use super::assignment::Assignment;

/// Receives the observations a walk makes while running.
#[automock]
pub trait ProgressSink {
    /// Called every `report_every` rounds while the instance is still unsatisfied.
    fn progress(&mut self, round: usize, assignment: &Assignment);
    /// Called once, with the satisfying assignment.
    fn finished(&mut self, round: usize, assignment: &Assignment);
}

/// Writes the round number and the `T`/`_` rendering of the assignment, one per line.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn report(&mut self, round: usize, assignment: &Assignment) {
        let written = writeln!(self.out, "{round}")
            .and_then(|_| writeln!(self.out, "{assignment}"))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            warn!("failed to write progress for round {round}: {e}");
        }
    }
}

impl<W: Write> ProgressSink for ConsoleSink<W> {
    fn progress(&mut self, round: usize, assignment: &Assignment) {
        self.report(round, assignment);
    }

    fn finished(&mut self, round: usize, assignment: &Assignment) {
        self.report(round, assignment);
    }
}
