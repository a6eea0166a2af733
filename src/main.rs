//! Mastermind Solver - CLI
//!
//! Two-player Mastermind duel with a deductive computer codebreaker.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{run_benchmark, run_exhaustive, run_play, solve_code},
    core::GameConfig,
    output::{print_benchmark_result, print_exhaustive_statistics, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Two-player Mastermind duel with a deductive computer codebreaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of peg colors (alphabet A..)
    #[arg(short = 'c', long, global = true, default_value = "6")]
    colors: usize,

    /// Number of pegs per code
    #[arg(short = 'l', long, global = true, default_value = "4")]
    length: usize,

    /// Guesses allowed per round
    #[arg(short = 'g', long, global = true, default_value = "12")]
    max_guesses: usize,

    /// Rounds per match
    #[arg(short = 'r', long, global = true, default_value = "2")]
    rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive duel against the computer (default)
    Play,

    /// Watch the computer deduce a specific secret code
    Solve {
        /// The secret code to deduce (e.g. ACBA)
        code: String,

        /// Show per-turn candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark deduction over random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test deduction against every possible code
    Exhaustive {
        /// Limit number of codes to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.colors, cli.length, cli.max_guesses, cli.rounds)?;

    // Default to the duel if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&config, std::io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { code, verbose } => {
            let result = solve_code(&code, &config).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random codes...");
            let result = run_benchmark(&config, count);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Exhaustive { limit } => {
            let stats = run_exhaustive(&config, limit);
            print_exhaustive_statistics(&stats);
            Ok(())
        }
    }
}
