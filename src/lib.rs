pub mod config;
pub mod dimacs;
pub mod error;
pub mod generator;
pub mod walk;

pub use error::{Error, Result};
