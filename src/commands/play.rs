//! Interactive CLI game loop
//!
//! Thin collaborator around the engine: reads guesses from stdin, renders
//! feedback, and loops until the game ends or the player quits.

use crate::core::Equation;
use crate::engine::{GameConfig, GameEngine, MAX_ATTEMPTS};
use crate::output::{print_guess_feedback, print_symbol_summary};
use colored::Colorize;
use std::io::{self, Write};

/// Options for the interactive game
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Random target per game; `false` fixes the first pool equation
    pub randomize: bool,
    /// Echo rejected input back alongside the error message
    pub show_invalid: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            randomize: true,
            show_invalid: false,
        }
    }
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if the pool is empty or reading user input fails.
pub fn run_play(pool: &[Equation], options: PlayOptions) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Welcome to Numberle!                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the hidden 7-character equation in at most {MAX_ATTEMPTS} guesses.");
    println!("Equations use digits and + - * / =, e.g. 1+2=3-0.\n");
    println!("After each valid guess you get a hint per character:");
    println!("  √ means correct digit or operator at the right place");
    println!("  ? means digit or operator exists but not here");
    println!("  × means it does not appear in this equation\n");
    println!("Type 'quit' to exit.\n");

    let mut game = GameEngine::new(
        pool,
        GameConfig {
            randomize: options.randomize,
        },
    );

    loop {
        game.start_new_game().map_err(|e| e.to_string())?;

        while !game.is_game_over() {
            println!(
                "You have {}/{MAX_ATTEMPTS} attempts remaining.",
                game.remaining_attempts()
            );
            let input = get_user_input("Enter your guess")?;

            if matches!(input.as_str(), "quit" | "q" | "exit") {
                println!("\nThanks for playing Numberle!\n");
                return Ok(());
            }

            if game.process_input(&input) {
                println!("{}", "─".repeat(64));
                let scored = game
                    .current_guess()
                    .ok_or("Accepted guess missing from game state")?;
                print_guess_feedback(scored);
                println!();
                print_symbol_summary(&game);
            } else if options.show_invalid {
                println!("{} {input}", "Invalid equation:".red());
            } else {
                println!("{}", "Invalid equation.".red());
            }

            println!("{}", "─".repeat(64));
        }

        if game.is_game_won() {
            println!(
                "\n{}",
                "Congratulations! You won the game!".bright_green().bold()
            );
        } else {
            let target = game
                .target()
                .ok_or("Finished game missing its target")?;
            println!(
                "\nGame over! You ran out of attempts. The target equation was: {}",
                target.text().bright_yellow().bold()
            );
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\nNew game started!\n"),
            _ => {
                println!("\nThanks for playing Numberle!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
