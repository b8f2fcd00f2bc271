//! Equation pool loading utilities
//!
//! Provides functions to load equation pools from files or use the embedded
//! constants. Lines that fail validation are filtered out before they can
//! enter the pool.

use crate::core::Equation;
use std::fs;
use std::io;
use std::path::Path;

/// Load equations from a file, one per line
///
/// Returns a vector of valid Equation instances, skipping blank and invalid
/// lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numberle::pools::loader::load_from_file;
///
/// let pool = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Equation>> {
    let content = fs::read_to_string(path)?;

    let equations = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Equation::new(trimmed).ok()
            }
        })
        .collect();

    Ok(equations)
}

/// Convert an embedded string slice to an Equation vector
///
/// # Examples
/// ```
/// use numberle::pools::EQUATIONS;
/// use numberle::pools::loader::equations_from_slice;
///
/// let pool = equations_from_slice(EQUATIONS);
/// assert_eq!(pool.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice.iter().filter_map(|&s| Equation::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equations_from_slice_converts_valid_equations() {
        let input = &["1+2=3-0", "1+21=22", "3*4=2*6"];
        let pool = equations_from_slice(input);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].text(), "1+2=3-0");
        assert_eq!(pool[1].text(), "1+21=22");
        assert_eq!(pool[2].text(), "3*4=2*6");
    }

    #[test]
    fn equations_from_slice_skips_invalid() {
        let input = &["1+2=3-0", "1+2=3-1", "not an equation", "1+21=22"];
        let pool = equations_from_slice(input);

        // Only the two valid equations survive
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].text(), "1+2=3-0");
        assert_eq!(pool[1].text(), "1+21=22");
    }

    #[test]
    fn equations_from_slice_empty() {
        let input: &[&str] = &[];
        let pool = equations_from_slice(input);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn load_from_embedded_pool() {
        use crate::pools::EQUATIONS;

        let pool = equations_from_slice(EQUATIONS);
        assert_eq!(pool.len(), EQUATIONS.len());
    }
}
