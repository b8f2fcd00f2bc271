//! Pool file validation command
//!
//! Scans an equation list and reports every line the validator rejects, so
//! external pools can be cleaned before play.

use crate::core::{Equation, EquationError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::Path;

/// Result of checking a pool file
pub struct CheckReport {
    /// Non-blank lines examined
    pub total: usize,
    /// Lines that parsed as valid equations
    pub valid: usize,
    /// Rejected lines: (1-based line number, text, reason)
    pub rejected: Vec<(usize, String, EquationError)>,
}

impl CheckReport {
    /// True iff every line validated
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Check every line of a pool file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn run_check<P: AsRef<Path>>(path: P) -> io::Result<CheckReport> {
    let content = fs::read_to_string(path)?;
    Ok(check_lines(content.lines()))
}

/// Validate an iterator of candidate lines, skipping blanks
fn check_lines<'a>(lines: impl Iterator<Item = &'a str>) -> CheckReport {
    let candidates: Vec<(usize, &str)> = lines
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let bar = ProgressBar::new(candidates.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} equations")
            .expect("static template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut rejected = Vec::new();
    for &(line_number, line) in &candidates {
        if let Err(error) = Equation::new(line) {
            rejected.push((line_number, line.to_string(), error));
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    CheckReport {
        total: candidates.len(),
        valid: candidates.len() - rejected.len(),
        rejected,
    }
}

/// Print the check report
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POOL CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Lines checked:  {}", report.total);
    println!(
        "   Valid:          {}",
        report.valid.to_string().green().bold()
    );
    println!(
        "   Rejected:       {}",
        if report.rejected.is_empty() {
            "0".green().bold()
        } else {
            report.rejected.len().to_string().red().bold()
        }
    );

    if !report.rejected.is_empty() {
        println!("\n   Rejected lines:");
        for (line_number, text, error) in &report.rejected {
            println!("     line {line_number}: {} ({error})", text.red());
        }
    }
    println!();
}
