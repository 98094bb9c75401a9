use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The chain and reset groups need variables beyond the three seed variables.
    #[error("instance needs at least 3 variables, got {0}")]
    TooFewVariables(usize),

    #[error("flip probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// The all-false assignment violates a generated clause, i.e. the generator is broken.
    #[error("all-false assignment violates clause #{clause}: {rendered}")]
    SeedNotSatisfied { clause: usize, rendered: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
