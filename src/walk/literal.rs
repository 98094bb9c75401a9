use std::fmt;

use super::assignment::Assignment;

/// "Variable `variable` must equal `polarity`."
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub variable: usize,
    pub polarity: bool,
}

impl Literal {
    pub fn new(variable: usize, polarity: bool) -> Self {
        Literal { variable, polarity }
    }

    pub fn positive(variable: usize) -> Self {
        Literal::new(variable, true)
    }

    pub fn negative(variable: usize) -> Self {
        Literal::new(variable, false)
    }

    // Method to return the negation of the literal
    pub fn negate(self) -> Self {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        assignment.get(self.variable) == self.polarity
    }

    /// Variable name used in clause listings: `a` for 0, `b` for 1, and so on.
    pub fn letter(&self) -> Option<char> {
        u32::try_from(self.variable)
            .ok()
            .and_then(|v| v.checked_add(u32::from(b'a')))
            .and_then(char::from_u32)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.polarity {
            write!(f, "!")?;
        }
        match self.letter() {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "x{}", self.variable),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity {
            write!(f, "{}", self.variable)
        } else {
            write!(f, "¬{}", self.variable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_letters() {
        assert_eq!(Literal::positive(0).to_string(), "a");
        assert_eq!(Literal::negative(2).to_string(), "!c");
        assert_eq!(Literal::negative(7).to_string(), "!h");
    }

    #[test]
    fn negate_flips_polarity_only() {
        let lit = Literal::positive(4);
        assert_eq!(lit.negate(), Literal::negative(4));
        assert_eq!(lit.negate().negate(), lit);
    }

    #[test]
    fn satisfied_when_value_matches_polarity() {
        let assignment = Assignment::from(vec![true, false]);
        assert!(Literal::positive(0).is_satisfied_by(&assignment));
        assert!(!Literal::negative(0).is_satisfied_by(&assignment));
        assert!(Literal::negative(1).is_satisfied_by(&assignment));
    }
}
