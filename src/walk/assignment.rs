use std::fmt;

use super::random_source::RandomSource;

/// One truth value per variable, indexed by `Literal::variable`.
#[derive(Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn all_false(variables: usize) -> Assignment {
        Assignment {
            values: vec![false; variables],
        }
    }

    /// Each bit drawn independently from a fair coin.
    pub fn random(variables: usize, rng: &mut dyn RandomSource) -> Assignment {
        Assignment {
            values: (0..variables).map(|_| rng.coin()).collect(),
        }
    }

    pub fn get(&self, variable: usize) -> bool {
        self.values[variable]
    }

    pub fn flip(&mut self, variable: usize) {
        self.values[variable] ^= true;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Assignment { values }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            write!(f, "{}", if *value { 'T' } else { '_' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Assignment({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::random_source::MockRandomSource;

    #[test]
    fn renders_fixed_width() {
        let assignment = Assignment::from(vec![true, false, false, true]);
        assert_eq!(assignment.to_string(), "T__T");
        assert_eq!(Assignment::all_false(3).to_string(), "___");
    }

    #[test]
    fn flip_toggles_in_place() {
        let mut assignment = Assignment::all_false(2);
        assignment.flip(1);
        assert_eq!(assignment.as_slice(), &[false, true]);
        assignment.flip(1);
        assert_eq!(assignment.as_slice(), &[false, false]);
    }

    #[test]
    fn random_draws_one_coin_per_variable() {
        let mut rng = MockRandomSource::new();
        let mut bits = vec![true, false, true].into_iter();
        rng.expect_coin()
            .times(3)
            .returning(move || bits.next().unwrap());

        let assignment = Assignment::random(3, &mut rng);
        assert_eq!(assignment.as_slice(), &[true, false, true]);
    }
}
