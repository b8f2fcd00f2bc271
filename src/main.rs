//! Numberle - CLI
//!
//! Wordle-style equation guessing game: interactive play plus pool-file
//! validation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use numberle::{
    commands::{PlayOptions, print_check_report, run_check, run_play},
    core::Equation,
    pools::{EQUATIONS, loader::equations_from_slice},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Guess the hidden arithmetic equation in 6 attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Equation pool: 'embedded' (default) or path to a file with one equation per line
    #[arg(short = 'p', long, global = true, default_value = "embedded")]
    pool: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively (default)
    Play {
        /// Always pick the first pool equation instead of a random one
        #[arg(long)]
        fixed_target: bool,

        /// Echo rejected input back with the error message
        #[arg(long)]
        show_invalid: bool,
    },

    /// Validate an equation pool file and report rejected lines
    Check {
        /// Pool file to check
        file: PathBuf,
    },
}

/// Load the equation pool based on the -p flag
///
/// Invalid lines in a file-sourced pool are filtered out before play.
fn load_pool(pool_mode: &str) -> Result<Vec<Equation>> {
    use numberle::pools::loader::load_from_file;

    match pool_mode {
        "embedded" => Ok(equations_from_slice(EQUATIONS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        fixed_target: false,
        show_invalid: false,
    });

    match command {
        Commands::Play {
            fixed_target,
            show_invalid,
        } => {
            let pool = load_pool(&cli.pool)?;
            let options = PlayOptions {
                randomize: !fixed_target,
                show_invalid,
            };
            run_play(&pool, options).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { file } => {
            let report = run_check(&file)?;
            print_check_report(&report);
            Ok(())
        }
    }
}
