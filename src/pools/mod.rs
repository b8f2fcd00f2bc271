//! Candidate equation pools
//!
//! Provides the embedded equation list compiled into the binary plus a file
//! loader for external pools.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EQUATION_LENGTH, validate};

    #[test]
    fn equations_count_matches_const() {
        assert_eq!(EQUATIONS.len(), EQUATIONS_COUNT);
    }

    #[test]
    fn pool_is_not_empty() {
        assert!(EQUATIONS_COUNT > 0);
    }

    #[test]
    fn embedded_equations_are_valid() {
        // The whole pool must pass the validator: an invalid target would
        // make the game unwinnable through valid guesses
        for &equation in EQUATIONS {
            assert_eq!(equation.len(), EQUATION_LENGTH, "bad length: {equation}");
            assert!(validate(equation), "invalid equation: {equation}");
        }
    }

    #[test]
    fn embedded_equations_are_distinct() {
        let distinct: std::collections::HashSet<_> = EQUATIONS.iter().collect();
        assert_eq!(distinct.len(), EQUATIONS.len());
    }
}
