//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};

/// Glyph for a single mark
///
/// `√` means correct character at the right place, `?` means the character
/// exists elsewhere, `×` means it does not appear in the equation.
#[must_use]
pub const fn mark_glyph(mark: Mark) -> char {
    match mark {
        Mark::Correct => '√',
        Mark::Present => '?',
        Mark::Absent => '×',
    }
}

/// Format feedback as a glyph string, one glyph per position
#[must_use]
pub fn feedback_to_marks(feedback: &Feedback) -> String {
    feedback.marks().iter().copied().map(mark_glyph).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;

    #[test]
    fn glyphs_are_distinct() {
        assert_eq!(mark_glyph(Mark::Correct), '√');
        assert_eq!(mark_glyph(Mark::Present), '?');
        assert_eq!(mark_glyph(Mark::Absent), '×');
    }

    #[test]
    fn marks_for_perfect_guess() {
        assert_eq!(feedback_to_marks(&Feedback::PERFECT), "√√√√√√√");
    }

    #[test]
    fn marks_for_mixed_guess() {
        let guess = Equation::new("1+2=0+3").unwrap();
        let target = Equation::new("1+2=3-0").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback_to_marks(&feedback), "√√√√?×?");
    }
}
