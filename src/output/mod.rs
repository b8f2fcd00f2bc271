//! Terminal output formatting
//!
//! Pure string formatters plus colored display helpers. Glyph and color
//! choices live here, never in the engine.

pub mod display;
pub mod formatters;

pub use display::{print_guess_feedback, print_symbol_summary};
pub use formatters::{feedback_to_marks, mark_glyph};
