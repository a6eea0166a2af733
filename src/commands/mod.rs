//! Command implementations

pub mod benchmark;
pub mod exhaustive;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use exhaustive::{ExhaustiveStatistics, run_exhaustive};
pub use play::run_play;
pub use solve::{GuessStep, SolveResult, solve_code};
