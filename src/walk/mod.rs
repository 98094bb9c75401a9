//! Decimation walk: a probabilistic local search that, for every unsatisfied
//! clause it visits, toggles each of the clause's variables with probability `p`.

pub mod assignment;
pub mod clause;
pub mod decimation;
pub mod driver;
pub mod evaluator;
pub mod literal;
pub mod observer;
pub mod random_source;

pub use assignment::Assignment;
pub use clause::{Clause, Instance};
pub use decimation::decimate;
pub use driver::{perturb_from, perturb_until_satisfied, Outcome};
pub use evaluator::{clause_satisfied, first_unsatisfied, instance_satisfied};
pub use literal::Literal;
pub use observer::{ConsoleSink, ProgressSink};
pub use random_source::{RandomSource, RngSource};
