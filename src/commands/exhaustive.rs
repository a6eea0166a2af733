//! Exhaustive evaluation command
//!
//! Runs the codebreaker against every code in the configured space and
//! aggregates statistics. Games are independent, so they run in parallel;
//! each worker owns its own tracker.

use crate::core::{Code, GameConfig};
use crate::scoring::ScoringEngine;
use crate::solver::CandidateTracker;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub code: String,
    pub guesses: usize,
    pub cracked: bool,
}

/// Statistics from testing the whole code space
#[derive(Debug)]
pub struct ExhaustiveStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub worst_codes: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Run the codebreaker against every code (or a limited prefix of the space)
///
/// # Panics
///
/// Panics if the progress-bar template is malformed, which is a programming
/// error caught by any run.
#[must_use]
pub fn run_exhaustive(config: &GameConfig, limit: Option<usize>) -> ExhaustiveStatistics {
    let space = CandidateTracker::new(config.clone());
    let targets: Vec<Code> = space
        .candidates()
        .iter()
        .take(limit.unwrap_or_else(|| space.size()))
        .cloned()
        .collect();

    println!("Testing {} codes...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let engine = ScoringEngine::new(config.clone());
    let start = Instant::now();

    let results: Vec<CodeTestResult> = targets
        .par_iter()
        .map(|secret| {
            let result = deduce_one(config, &engine, secret);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    let total_time = start.elapsed();

    aggregate(results, total_time)
}

/// Play one full deduction game against a known secret
fn deduce_one(config: &GameConfig, engine: &ScoringEngine, secret: &Code) -> CodeTestResult {
    let mut tracker = CandidateTracker::new(config.clone());
    let mut guesses = 0;
    let mut cracked = false;

    while guesses < config.max_guesses() {
        guesses += 1;

        let Ok(guess) = tracker.sample() else {
            break;
        };
        let Ok(feedback) = engine.score(secret, &guess) else {
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

    CodeTestResult {
        code: secret.to_string(),
        guesses,
        cracked,
    }
}

fn aggregate(results: Vec<CodeTestResult>, total_time: Duration) -> ExhaustiveStatistics {
    let total_codes = results.len();
    let solved = results.iter().filter(|r| r.cracked).count();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.cracked) {
        *guess_distribution.entry(result.guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = results.iter().map(|r| r.guesses).sum();

    let mut by_difficulty: Vec<(String, usize)> = results
        .iter()
        .map(|r| (r.code.clone(), r.guesses))
        .collect();
    by_difficulty.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    by_difficulty.truncate(5);

    ExhaustiveStatistics {
        total_codes,
        solved,
        failed: total_codes - solved,
        guess_distribution,
        average_guesses: if total_codes == 0 {
            0.0
        } else {
            total_guesses as f64 / total_codes as f64
        },
        min_guesses: results.iter().map(|r| r.guesses).min().unwrap_or(0),
        max_guesses: results.iter().map(|r| r.guesses).max().unwrap_or(0),
        worst_codes: by_difficulty,
        total_time,
    }
}
