//! Game orchestration and attempt tracking
//!
//! `GameEngine` drives one single-player session: it selects the target,
//! validates and scores guesses, merges the aggregate symbol sets, and runs
//! the NotStarted → InProgress → Won/Lost state machine. Instances are
//! synchronous and single-session; one engine per concurrent game.

use super::selector::{EmptyPoolError, SelectionMode, select_target};
use super::symbols::SymbolTracker;
use crate::core::{Equation, Feedback};
use rustc_hash::FxHashSet;

/// Maximum number of attempts per game
pub const MAX_ATTEMPTS: usize = 6;

/// Game state machine
///
/// `Won` and `Lost` are terminal until [`GameEngine::start_new_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No game started yet; guesses are rejected
    NotStarted,
    /// Game running, attempts remain
    InProgress,
    /// A guess matched the target
    Won,
    /// All attempts used without a match
    Lost,
}

/// Engine configuration
///
/// Explicit constructor parameters rather than global flags, so instances
/// stay independently testable.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Pick the target uniformly at random; `false` always picks the first
    /// pool element, for reproducible tests
    pub randomize: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { randomize: true }
    }
}

impl GameConfig {
    const fn selection_mode(self) -> SelectionMode {
        if self.randomize {
            SelectionMode::Random
        } else {
            SelectionMode::First
        }
    }
}

/// An accepted guess together with its feedback
///
/// Immutable snapshot replaced wholesale on each accepted attempt; callers
/// never observe a live-mutating buffer.
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    equation: Equation,
    feedback: Feedback,
}

impl ScoredGuess {
    /// The guessed equation
    #[must_use]
    pub const fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Per-position feedback for the guess
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Single-session Numberle game engine
///
/// # Examples
/// ```
/// use numberle::core::Equation;
/// use numberle::engine::{GameConfig, GameEngine};
///
/// let pool = vec![Equation::new("1+2=3-0").unwrap()];
/// let mut game = GameEngine::new(&pool, GameConfig { randomize: false });
/// game.start_new_game().unwrap();
///
/// assert!(game.process_input("1+2=3-0"));
/// assert!(game.is_game_won());
/// ```
pub struct GameEngine<'a> {
    pool: &'a [Equation],
    config: GameConfig,
    status: GameStatus,
    target: Option<Equation>,
    attempts: usize,
    current_guess: Option<ScoredGuess>,
    symbols: SymbolTracker,
}

impl<'a> GameEngine<'a> {
    /// Create an engine over a candidate pool
    ///
    /// No target is selected yet; call [`Self::start_new_game`] first.
    #[must_use]
    pub fn new(pool: &'a [Equation], config: GameConfig) -> Self {
        Self {
            pool,
            config,
            status: GameStatus::NotStarted,
            target: None,
            attempts: 0,
            current_guess: None,
            symbols: SymbolTracker::new(),
        }
    }

    /// Reset everything and select a fresh target
    ///
    /// Valid from any state.
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the candidate pool is empty; the game
    /// cannot proceed without a target.
    pub fn start_new_game(&mut self) -> Result<(), EmptyPoolError> {
        let target = select_target(self.pool, self.config.selection_mode())?.clone();

        self.target = Some(target);
        self.status = GameStatus::InProgress;
        self.attempts = 0;
        self.current_guess = None;
        self.symbols.reset();
        Ok(())
    }

    /// Alias for [`Self::start_new_game`]
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the candidate pool is empty.
    pub fn initialize(&mut self) -> Result<(), EmptyPoolError> {
        self.start_new_game()
    }

    /// Submit a guess
    ///
    /// Returns `false` without mutating anything if the game is not in
    /// progress or the input is not a valid equation. On a valid guess the
    /// attempt counter increments, feedback is scored and merged into the
    /// aggregate sets, and the status transitions to `Won` on an exact match
    /// or `Lost` when the last attempt misses.
    pub fn process_input(&mut self, raw: &str) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }
        let Some(target) = &self.target else {
            return false;
        };

        let Ok(guess) = Equation::new(raw) else {
            return false;
        };

        let feedback = Feedback::score(&guess, target);
        self.attempts += 1;
        self.symbols.record(&guess, &feedback);

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.attempts == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        self.current_guess = Some(ScoredGuess {
            equation: guess,
            feedback,
        });
        true
    }

    /// Current state machine position
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// True iff the game is won or lost
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Won | GameStatus::Lost)
    }

    /// True iff a guess matched the target
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// The hidden target, once a game has started
    #[must_use]
    pub const fn target(&self) -> Option<&Equation> {
        self.target.as_ref()
    }

    /// The most recent accepted guess with its feedback
    #[must_use]
    pub const fn current_guess(&self) -> Option<&ScoredGuess> {
        self.current_guess.as_ref()
    }

    /// Attempts left in the current game
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts
    }

    /// Valid guesses submitted so far this game
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Symbols never seen in the target
    #[must_use]
    pub const fn grey_symbols(&self) -> &FxHashSet<char> {
        self.symbols.grey()
    }

    /// Symbols in the target whose best placement so far is wrong
    #[must_use]
    pub const fn yellow_symbols(&self) -> &FxHashSet<char> {
        self.symbols.yellow()
    }

    /// Symbols placed correctly at least once
    #[must_use]
    pub const fn green_symbols(&self) -> &FxHashSet<char> {
        self.symbols.green()
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

    fn fixed_game(pool: &[Equation]) -> GameEngine<'_> {
        let mut game = GameEngine::new(pool, GameConfig { randomize: false });
        game.start_new_game().unwrap();
        game
    }

    #[test]
    fn new_engine_is_not_started() {
        let pool = pool();
        let game = GameEngine::new(&pool, GameConfig::default());

        assert_eq!(game.status(), GameStatus::NotStarted);
        assert!(game.target().is_none());
        assert!(!game.is_game_over());
        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn guess_before_start_is_rejected() {
        let pool = pool();
        let mut game = GameEngine::new(&pool, GameConfig::default());

        assert!(!game.process_input("1+2=3-0"));
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn start_new_game_needs_a_pool() {
        let mut game = GameEngine::new(&[], GameConfig::default());
        assert_eq!(game.start_new_game(), Err(EmptyPoolError));
        assert_eq!(game.status(), GameStatus::NotStarted);
    }

    #[test]
    fn fixed_selection_picks_first() {
        let pool = pool();
        let game = fixed_game(&pool);
        assert_eq!(game.target().unwrap().text(), "1+2=3-0");
    }

    #[test]
    fn winning_guess() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        assert!(game.process_input("1+2=3-0"));
        assert!(game.is_game_won());
        assert!(game.is_game_over());
        assert_eq!(game.remaining_attempts(), 5);
    }

    #[test]
    fn valid_wrong_guess_keeps_game_running() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        assert!(game.process_input("3*4=2*6"));
        assert!(!game.is_game_over());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining_attempts(), 5);
        assert_eq!(game.current_guess().unwrap().equation().text(), "3*4=2*6");
    }

    #[test]
    fn invalid_guess_mutates_nothing() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        // Arithmetically unequal
        assert!(!game.process_input("1+2=3-1"));
        // Division by zero and a double '='
        assert!(!game.process_input("1/0+5=="));
        // Wrong length
        assert!(!game.process_input("1+1=2"));

        assert_eq!(game.attempts(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.current_guess().is_none());
        assert!(game.grey_symbols().is_empty());
        assert!(game.yellow_symbols().is_empty());
        assert!(game.green_symbols().is_empty());
    }

    #[test]
    fn six_misses_lose_the_game() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        for _ in 0..MAX_ATTEMPTS {
            assert!(game.process_input("3*4=2*6"));
        }

        assert_eq!(game.remaining_attempts(), 0);
        assert!(game.is_game_over());
        assert!(!game.is_game_won());
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        assert!(game.process_input("1+2=3-0"));
        assert!(game.is_game_won());

        assert!(!game.process_input("3*4=2*6"));
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn attempts_never_exceed_maximum() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        for _ in 0..(MAX_ATTEMPTS + 3) {
            game.process_input("3*4=2*6");
        }
        assert_eq!(game.attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn start_new_game_resets_everything() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        game.process_input("1+2=0+3");
        assert_eq!(game.attempts(), 1);
        assert!(!game.green_symbols().is_empty());

        game.start_new_game().unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempts(), 0);
        assert!(game.current_guess().is_none());
        assert!(game.grey_symbols().is_empty());
        assert!(game.yellow_symbols().is_empty());
        assert!(game.green_symbols().is_empty());
    }

    #[test]
    fn restart_after_loss_is_playable() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        for _ in 0..MAX_ATTEMPTS {
            game.process_input("3*4=2*6");
        }
        assert_eq!(game.status(), GameStatus::Lost);

        game.start_new_game().unwrap();
        assert!(game.process_input("1+2=3-0"));
        assert!(game.is_game_won());
    }

    #[test]
    fn winning_guess_fills_green_only() {
        let pool = pool();
        let mut game = fixed_game(&pool);

        game.process_input("1+2=3-0");
        for symbol in ['1', '+', '2', '=', '3', '-', '0'] {
            assert!(game.green_symbols().contains(&symbol));
        }
        assert!(game.yellow_symbols().is_empty());
        assert!(game.grey_symbols().is_empty());
    }

    #[test]
    fn random_selection_stays_in_pool() {
        let pool = pool();
        let mut game = GameEngine::new(&pool, GameConfig { randomize: true });

        for _ in 0..10 {
            game.start_new_game().unwrap();
            assert!(pool.contains(game.target().unwrap()));
        }
    }

    #[test]
    fn initialize_is_start_new_game() {
        let pool = pool();
        let mut game = GameEngine::new(&pool, GameConfig { randomize: false });

        game.initialize().unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.target().unwrap().text(), "1+2=3-0");
    }
}
