//! Display functions for game state

use super::formatters::{feedback_to_marks, mark_glyph};
use crate::core::Mark;
use crate::engine::{GameEngine, ScoredGuess};
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print a scored guess: the equation colored per mark, then the glyph row
pub fn print_guess_feedback(scored: &ScoredGuess) {
    let mut colored_row = String::new();
    for (&ch, &mark) in scored
        .equation()
        .chars()
        .iter()
        .zip(scored.feedback().marks())
    {
        let ch = char::from(ch).to_string();
        let painted = match mark {
            Mark::Correct => ch.bright_green().bold(),
            Mark::Present => ch.bright_yellow().bold(),
            Mark::Absent => ch.bright_black(),
        };
        colored_row.push_str(&painted.to_string());
    }

    println!("  {colored_row}");
    println!("  {}", feedback_to_marks(scored.feedback()));
}

/// Print the aggregate symbol sets, one colored line per classification
pub fn print_symbol_summary(game: &GameEngine<'_>) {
    println!(
        "  {} {}",
        format!("{} correct place:", mark_glyph(Mark::Correct)).bright_green(),
        sorted_symbols(game.green_symbols())
    );
    println!(
        "  {} {}",
        format!("{} wrong place:  ", mark_glyph(Mark::Present)).bright_yellow(),
        sorted_symbols(game.yellow_symbols())
    );
    println!(
        "  {} {}",
        format!("{} not present:  ", mark_glyph(Mark::Absent)).bright_black(),
        sorted_symbols(game.grey_symbols())
    );
}

/// Deterministic rendering of a symbol set
fn sorted_symbols(symbols: &FxHashSet<char>) -> String {
    let mut sorted: Vec<char> = symbols.iter().copied().collect();
    sorted.sort_unstable();
    sorted
        .into_iter()
        .map(|ch| ch.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_symbols_is_deterministic() {
        let symbols: FxHashSet<char> = ['3', '+', '1'].into_iter().collect();
        assert_eq!(sorted_symbols(&symbols), "+ 1 3");
    }

    #[test]
    fn sorted_symbols_empty() {
        assert_eq!(sorted_symbols(&FxHashSet::default()), "");
    }
}
