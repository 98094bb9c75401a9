//! Configuration of a walk.

use crate::error::{Error, Result};

/// Variable count used when none is given.
pub const DEFAULT_VARIABLES: usize = 8;

/// sin²(π/4), i.e. a fair coin.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

pub const DEFAULT_REPORT_EVERY: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// The probability of toggling each literal of an unsatisfied clause.
    pub probability: f64,

    /// Rounds between progress observations.
    pub report_every: usize,

    /// Stop after this many rounds even if unsatisfied. Unbounded when `None`.
    pub max_rounds: Option<usize>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            probability: DEFAULT_PROBABILITY,
            report_every: DEFAULT_REPORT_EVERY,
            max_rounds: None,
        }
    }
}

impl DriverConfig {
    pub fn with_probability(probability: f64) -> Self {
        DriverConfig {
            probability,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(Error::InvalidProbability(self.probability));
        }
        Ok(())
    }
}
