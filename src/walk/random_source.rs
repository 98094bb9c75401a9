use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// For Testing
use mockall::*;

/// Defines an interface for the random draws made during a walk.
/// Provides the initial coin flips and the per-literal flip decisions.
#[automock]
pub trait RandomSource {
    /// Gets a fair random boolean
    fn coin(&mut self) -> bool;
    /// Gets `true` with probability `p`
    fn chance(&mut self, p: f64) -> bool;
}

/// Adapts any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn coin(&mut self) -> bool {
        self.rng.gen()
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let first: Vec<bool> = (0..64).map(|_| a.coin()).collect();
        let second: Vec<bool> = (0..64).map(|_| b.coin()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn chance_is_certain_at_the_bounds() {
        let mut rng = RngSource::seeded(1);
        assert!((0..100).all(|_| rng.chance(1.0)));
        assert!((0..100).all(|_| !rng.chance(0.0)));
    }
}
