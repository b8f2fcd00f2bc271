//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckReport, print_check_report, run_check};
pub use play::{PlayOptions, run_play};
