//! Benchmark command
//!
//! Measures deduction performance across randomly drawn secrets.

use crate::core::GameConfig;
use crate::game::Codemaker;
use crate::solver::CandidateTracker;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Run the codebreaker against `count` random secrets
///
/// One tracker serves the whole run, reset before each secret, the same way
/// a codebreaking player reuses it round after round.
#[must_use]
pub fn run_benchmark(config: &GameConfig, count: usize) -> BenchmarkResult {
    let start = Instant::now();

    let mut tracker = CandidateTracker::new(config.clone());
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..count {
        let maker = Codemaker::random(config);
        tracker.reset();

        let mut guesses = 0;
        let mut cracked = false;

        while guesses < config.max_guesses() {
            guesses += 1;

            let Ok(guess) = tracker.sample() else {
                break;
            };
            let Ok(feedback) = maker.feedback_for(&guess) else {
                break;
            };

            if feedback.is_crack(config.code_length()) {
                cracked = true;
                break;
            }

            if tracker.narrow(&guess, feedback).is_err() {
                break;
            }
        }

        if cracked {
            solved += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();

    BenchmarkResult {
        total_codes: count,
        solved,
        total_guesses,
        average_guesses: if count == 0 {
            0.0
        } else {
            total_guesses as f64 / count as f64
        },
        min_guesses: if count == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        codes_per_second: count as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        // 4^3 = 64 codes keeps test runs quick
        GameConfig::new(4, 3, 12, 1).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let config = small_config();
        let result = run_benchmark(&config, 10);

        assert_eq!(result.total_codes, 10);
        assert!(result.total_guesses >= 10);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= config.max_guesses());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = small_config();
        let result = run_benchmark(&config, 10);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_codes);
    }

    #[test]
    fn benchmark_solves_small_spaces() {
        // 2^2 = 4 codes against a 12-guess budget: every wrong guess removes
        // at least itself, so every game cracks
        let config = GameConfig::new(2, 2, 12, 1).unwrap();
        let result = run_benchmark(&config, 10);

        assert_eq!(result.solved, 10);
    }

    #[test]
    fn benchmark_empty_run() {
        let config = small_config();
        let result = run_benchmark(&config, 0);

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert_eq!(result.max_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let config = small_config();
        let result = run_benchmark(&config, 10);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=config.max_guesses()).contains(&guess_count));
        }
    }
}
