//! Candidate set tracking
//!
//! The tracker holds every code still consistent with the feedback observed
//! this round. A candidate survives `narrow` exactly when scoring it against
//! the guess reproduces the observed feedback, so the true secret can never
//! be eliminated by honest feedback.

use crate::core::{Code, CodeError, Feedback, GameConfig, Peg};
use crate::scoring::ScoringEngine;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Error type for sampling from an exhausted candidate set
///
/// This is a caller logic error, not a game state: it can only happen when
/// `narrow` was fed feedback inconsistent with every remaining candidate
/// (a scoring bug or a mismatched secret/feedback pairing upstream). There is
/// no recovery inside the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCandidateSet;

impl fmt::Display for EmptyCandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No candidates remain: observed feedback is inconsistent with every possible code"
        )
    }
}

impl std::error::Error for EmptyCandidateSet {}

/// Deduction state for one codebreaking round
///
/// Starts *full* (every code in the configured space) and shrinks
/// monotonically under `narrow`. One tracker serves a whole match: `reset`
/// refills the set at the start of each round the owner breaks codes in.
pub struct CandidateTracker {
    engine: ScoringEngine,
    candidates: Vec<Code>,
}

impl CandidateTracker {
    /// Create a tracker holding the full code space for the given rules
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let candidates = enumerate_codes(&config);
        Self {
            engine: ScoringEngine::new(config),
            candidates,
        }
    }

    /// Refill the candidate set with every code in the space
    ///
    /// Called at the start of a round; discards all accumulated deductions.
    pub fn reset(&mut self) {
        self.candidates = enumerate_codes(self.engine.config());
    }

    /// Discard every candidate inconsistent with an observed feedback
    ///
    /// Retains exactly the codes `c` with `score(c, guess) == observed`. The
    /// set never grows, and the actual secret always survives because scoring
    /// it against the guess is what produced `observed` in the first place.
    ///
    /// # Errors
    /// Returns `CodeError` if the guess itself is malformed; the candidate
    /// set is left untouched in that case.
    pub fn narrow(&mut self, guess: &Code, observed: Feedback) -> Result<(), CodeError> {
        self.engine.config().validate_code(guess)?;

        let engine = &self.engine;
        self.candidates.retain(|candidate| {
            engine
                .score(candidate, guess)
                .is_ok_and(|feedback| feedback == observed)
        });

        Ok(())
    }

    /// Draw one candidate uniformly at random
    ///
    /// Every consistent code is equally likely; the tracker does no
    /// guess-quality weighting of any kind.
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` if no candidates remain.
    pub fn sample(&self) -> Result<Code, EmptyCandidateSet> {
        self.candidates
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(EmptyCandidateSet)
    }

    /// Number of codes still possible
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    /// The codes still possible, in generation order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// The rules this tracker deduces under
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.engine.config()
    }
}

/// Generate the full code space: the alphabet crossed with itself
/// `code_length` times
fn enumerate_codes(config: &GameConfig) -> Vec<Code> {
    let mut rows: Vec<Vec<Peg>> = vec![Vec::new()];

    for _ in 0..config.code_length() {
        let mut extended = Vec::with_capacity(rows.len() * config.alphabet().len());
        for row in &rows {
            for &peg in config.alphabet() {
                let mut next = row.clone();
                next.push(peg);
                extended.push(next);
            }
        }
        rows = extended;
    }

    rows.into_iter().map(Code::from_pegs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_holds_full_space() {
        let tracker = CandidateTracker::new(GameConfig::classic());
        assert_eq!(tracker.size(), 1296);
    }

    #[test]
    fn enumeration_covers_space_without_duplicates() {
        use std::collections::HashSet;

        let config = GameConfig::new(3, 2, 12, 2).unwrap();
        let tracker = CandidateTracker::new(config);

        assert_eq!(tracker.size(), 9);
        let unique: HashSet<&Code> = tracker.candidates().iter().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn reset_restores_full_space() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        let guess = Code::parse("AAAA", &config).unwrap();
        tracker.narrow(&guess, Feedback::new(0, 0)).unwrap();
        assert!(tracker.size() < 1296);

        tracker.reset();
        assert_eq!(tracker.size(), 1296);

        // Reset is idempotent
        tracker.reset();
        assert_eq!(tracker.size(), 1296);
    }

    #[test]
    fn narrow_eliminates_codes_containing_excluded_color() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        // Zero overlap with AAAA means no candidate may contain an A
        let guess = Code::parse("AAAA", &config).unwrap();
        tracker.narrow(&guess, Feedback::new(0, 0)).unwrap();

        assert_eq!(tracker.size(), 625); // 5^4
        assert!(
            tracker
                .candidates()
                .iter()
                .all(|code| !code.pegs().contains(&Peg::new('A')))
        );
    }

    #[test]
    fn narrow_never_grows() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        let guesses = ["ABCD", "AABB", "FEDC"];
        let mut previous = tracker.size();

        for text in guesses {
            let guess = Code::parse(text, &config).unwrap();
            tracker.narrow(&guess, Feedback::new(1, 1)).unwrap();
            assert!(tracker.size() <= previous);
            previous = tracker.size();
        }
    }

    #[test]
    fn secret_survives_honest_narrowing() {
        let config = GameConfig::classic();
        let engine = ScoringEngine::new(config.clone());
        let secret = Code::parse("CBCA", &config).unwrap();
        let mut tracker = CandidateTracker::new(config.clone());

        // Feed the tracker real feedback from sampled guesses; the secret
        // must remain after every step
        for _ in 0..6 {
            let guess = tracker.sample().unwrap();
            let feedback = engine.score(&secret, &guess).unwrap();
            tracker.narrow(&guess, feedback).unwrap();

            assert!(
                tracker.candidates().contains(&secret),
                "secret eliminated after narrowing on {guess}"
            );

            if feedback.is_crack(config.code_length()) {
                break;
            }
        }
    }

    #[test]
    fn full_match_feedback_pins_single_candidate() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        let guess = Code::parse("DBEA", &config).unwrap();
        tracker.narrow(&guess, Feedback::new(4, 0)).unwrap();

        assert_eq!(tracker.size(), 1);
        assert_eq!(tracker.candidates()[0], guess);
    }

    #[test]
    fn sample_draws_from_remaining_candidates() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        let guess = Code::parse("AAAA", &config).unwrap();
        tracker.narrow(&guess, Feedback::new(0, 0)).unwrap();

        for _ in 0..20 {
            let sampled = tracker.sample().unwrap();
            assert!(tracker.candidates().contains(&sampled));
        }
    }

    #[test]
    fn contradictory_feedback_empties_set_and_sample_fails() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        let guess = Code::parse("AAAA", &config).unwrap();
        // 4 exact matches leaves only AAAA itself...
        tracker.narrow(&guess, Feedback::new(4, 0)).unwrap();
        // ...which zero overlap then contradicts
        tracker.narrow(&guess, Feedback::new(0, 0)).unwrap();

        assert_eq!(tracker.size(), 0);
        assert_eq!(tracker.sample(), Err(EmptyCandidateSet));
    }

    #[test]
    fn narrow_rejects_malformed_guess_and_keeps_set() {
        let config = GameConfig::classic();
        let mut tracker = CandidateTracker::new(config.clone());

        let short = Code::from_pegs(vec![Peg::new('A'), Peg::new('B')]);
        let result = tracker.narrow(&short, Feedback::new(0, 0));

        assert!(matches!(
            result,
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 2
            })
        ));
        assert_eq!(tracker.size(), 1296);
    }

    #[test]
    fn tracker_respects_configured_dimensions() {
        let config = GameConfig::new(4, 3, 12, 2).unwrap();
        let tracker = CandidateTracker::new(config);

        assert_eq!(tracker.size(), 64); // 4^3
        assert!(tracker.candidates().iter().all(|code| code.len() == 3));
    }
}
