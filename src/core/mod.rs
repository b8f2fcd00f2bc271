//! Core domain types for Numberle
//!
//! This module contains the fundamental domain types with zero I/O dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod equation;
mod feedback;

pub use equation::{EQUATION_LENGTH, Equation, EquationError, validate};
pub use feedback::{Feedback, Mark};
