//! Guess feedback scoring
//!
//! Feedback classifies every position of a guess against the target:
//! - Correct: right character, right position
//! - Present: character occurs elsewhere in the target
//! - Absent: character not in the target (or all its occurrences consumed)
//!
//! Duplicate characters follow Wordle's rules: exact matches consume the
//! target's multiset first, then remaining occurrences satisfy Present marks
//! left to right.

use super::{EQUATION_LENGTH, Equation};

/// Per-position classification of a guessed character
///
/// The derived ordering is the dominance rank used by aggregate symbol
/// tracking: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    /// Character does not appear in the target (or is already consumed)
    Absent,
    /// Character appears in the target at a different position
    Present,
    /// Character matches the target at this position
    Correct,
}

/// Feedback for a full 7-character guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    marks: [Mark; EQUATION_LENGTH],
}

impl Feedback {
    /// All correct (winning guess)
    pub const PERFECT: Self = Self {
        marks: [Mark::Correct; EQUATION_LENGTH],
    };

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and consume that
    ///    character from the target's multiset
    /// 2. Second pass, left to right: mark Present while unconsumed
    ///    occurrences remain, otherwise Absent
    ///
    /// Correct+Present marks for a character never exceed its occurrence
    /// count in the target.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, Feedback, Mark};
    ///
    /// let guess = Equation::new("1+2=0+3").unwrap();
    /// let target = Equation::new("1+2=3-0").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// assert_eq!(feedback.mark_at(0), Mark::Correct); // '1'
    /// assert_eq!(feedback.mark_at(4), Mark::Present); // '0' is elsewhere
    /// assert_eq!(feedback.mark_at(5), Mark::Absent);  // second '+' consumed
    /// ```
    #[must_use]
    pub fn score(guess: &Equation, target: &Equation) -> Self {
        let mut marks = [Mark::Absent; EQUATION_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact matches
        // Allow: index needed to access guess[i], target[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..EQUATION_LENGTH {
            if guess.chars()[i] == target.chars()[i] {
                marks[i] = Mark::Correct;

                // Consume from the target multiset
                let ch = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&ch) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced from the remaining multiset
        // Allow: index needed to access guess[i] and check/set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..EQUATION_LENGTH {
            if marks[i] == Mark::Absent {
                let ch = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&ch)
                    && *count > 0
                {
                    marks[i] = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self { marks }
    }

    /// Get the per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; EQUATION_LENGTH] {
        &self.marks
    }

    /// Get the mark at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.marks[position]
    }

    /// Check if every position is Correct (winning guess)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.marks.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Count positions with the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}
