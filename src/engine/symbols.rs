//! Aggregate symbol classification
//!
//! Tracks every character guessed so far in one of three disjoint sets,
//! classified by the best feedback ever observed for it. Classifications
//! only improve across a game (Absent < Present < Correct); a symbol shown
//! green never regresses to yellow or grey, so results are merged into the
//! existing state rather than recomputed per guess.

use crate::core::{Equation, Feedback, Mark};
use rustc_hash::FxHashSet;

/// Grey/yellow/green symbol sets with monotonic dominance merging
#[derive(Debug, Default, Clone)]
pub struct SymbolTracker {
    grey: FxHashSet<char>,
    yellow: FxHashSet<char>,
    green: FxHashSet<char>,
}

impl SymbolTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one scored guess into the aggregate sets
    pub fn record(&mut self, guess: &Equation, feedback: &Feedback) {
        for (&ch, &mark) in guess.chars().iter().zip(feedback.marks()) {
            self.record_symbol(char::from(ch), mark);
        }
    }

    /// Merge a single symbol at the given rank, never regressing
    fn record_symbol(&mut self, symbol: char, mark: Mark) {
        if self.rank(symbol).is_some_and(|best| best >= mark) {
            return;
        }

        // Upgrade: drop from any lower set, then insert at the new rank
        self.grey.remove(&symbol);
        self.yellow.remove(&symbol);
        match mark {
            Mark::Absent => self.grey.insert(symbol),
            Mark::Present => self.yellow.insert(symbol),
            Mark::Correct => self.green.insert(symbol),
        };
    }

    /// Best classification observed for a symbol, if it was ever guessed
    fn rank(&self, symbol: char) -> Option<Mark> {
        if self.green.contains(&symbol) {
            Some(Mark::Correct)
        } else if self.yellow.contains(&symbol) {
            Some(Mark::Present)
        } else if self.grey.contains(&symbol) {
            Some(Mark::Absent)
        } else {
            None
        }
    }

    /// Symbols never seen in the target
    #[must_use]
    pub const fn grey(&self) -> &FxHashSet<char> {
        &self.grey
    }

    /// Symbols seen in the target, best placement so far wrong
    #[must_use]
    pub const fn yellow(&self) -> &FxHashSet<char> {
        &self.yellow
    }

    /// Symbols placed correctly at least once
    #[must_use]
    pub const fn green(&self) -> &FxHashSet<char> {
        &self.green
    }

    /// Clear all three sets for a new game
    pub fn reset(&mut self) {
        self.grey.clear();
        self.yellow.clear();
        self.green.clear();
    }
}
