//! Target selection
//!
//! Picks the hidden target equation from a candidate pool, either uniformly
//! at random or deterministically for reproducible tests.

use crate::core::Equation;
use std::fmt;

/// How the target is picked from the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Uniform random choice
    Random,
    /// First pool element; the deterministic switch for automated tests
    First,
}

/// Error returned when the candidate pool is empty
///
/// A game cannot start without a target, so this is surfaced to the caller
/// rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Candidate equation pool is empty")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Select a target equation from the pool
///
/// # Errors
/// Returns `EmptyPoolError` if the pool has no equations.
///
/// # Examples
/// ```
/// use numberle::core::Equation;
/// use numberle::engine::{SelectionMode, select_target};
///
/// let pool = vec![Equation::new("1+2=3-0").unwrap()];
/// let target = select_target(&pool, SelectionMode::First).unwrap();
/// assert_eq!(target.text(), "1+2=3-0");
/// ```
pub fn select_target(
    pool: &[Equation],
    mode: SelectionMode,
) -> Result<&Equation, EmptyPoolError> {
    match mode {
        SelectionMode::Random => {
            use rand::prelude::IndexedRandom;
            pool.choose(&mut rand::rng()).ok_or(EmptyPoolError)
        }
        SelectionMode::First => pool.first().ok_or(EmptyPoolError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Equation> {
        ["1+2=3-0", "1+21=22", "3*4=2*6"]
            .iter()
            .map(|text| Equation::new(*text).unwrap())
            .collect()
    }

    #[test]
    fn first_mode_is_deterministic() {
        let pool = pool();
        let target = select_target(&pool, SelectionMode::First).unwrap();
        assert_eq!(target.text(), "1+2=3-0");
    }

    #[test]
    fn random_mode_picks_from_pool() {
        let pool = pool();
        for _ in 0..20 {
            let target = select_target(&pool, SelectionMode::Random).unwrap();
            assert!(pool.contains(target));
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert_eq!(
            select_target(&[], SelectionMode::Random),
            Err(EmptyPoolError)
        );
        assert_eq!(select_target(&[], SelectionMode::First), Err(EmptyPoolError));
    }
}
