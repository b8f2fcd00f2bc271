//! Numberle
//!
//! A Wordle-style game over arithmetic equations: guess the hidden valid
//! 7-character equation within 6 attempts, with per-character feedback and
//! aggregate grey/yellow/green symbol tracking.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::core::Equation;
//! use numberle::engine::{GameConfig, GameEngine};
//!
//! let pool = vec![Equation::new("1+2=3-0").unwrap()];
//! let mut game = GameEngine::new(&pool, GameConfig { randomize: false });
//! game.start_new_game().unwrap();
//!
//! assert!(game.process_input("1+2=3-0"));
//! assert!(game.is_game_won());
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod engine;

// Candidate equation pools
pub mod pools;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
