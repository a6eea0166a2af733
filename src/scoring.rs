//! Feedback scoring
//!
//! Computes classic Mastermind feedback for a (secret, guess) pair. Duplicate
//! colors are the classic trap here: marking matched positions while iterating
//! double-counts a color that repeats in both codes. Scoring instead computes
//! the total color overlap as a multiset intersection (per-color minimum
//! counts over the whole alphabet) and subtracts the exact matches, which is
//! order-independent and consumes each peg instance at most once.

use crate::core::{Code, CodeError, Feedback, GameConfig};

/// Pure feedback calculator for one game configuration
///
/// `score` is a deterministic function of its two inputs with no side
/// effects; the engine itself holds nothing but the rules.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: GameConfig,
}

impl ScoringEngine {
    /// Create an engine for the given rules
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// The rules this engine scores under
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Score a guess against a secret
    ///
    /// # Algorithm
    /// 1. `exact` = positions where secret and guess hold the same peg
    /// 2. `total` = Σ over every alphabet color of
    ///    `min(count in secret, count in guess)`
    /// 3. `color_only = total - exact`
    ///
    /// The sum runs over the full alphabet, not just colors present in the
    /// inputs; an absent color contributes 0 to both counts.
    ///
    /// # Errors
    /// Returns `CodeError` if either code has the wrong length or contains a
    /// symbol outside the configured alphabet. Codes are re-checked here even
    /// though parsing already validates them, so a hand-assembled code cannot
    /// silently mis-score.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, GameConfig};
    /// use mastermind_solver::scoring::ScoringEngine;
    ///
    /// let config = GameConfig::classic();
    /// let engine = ScoringEngine::new(config.clone());
    ///
    /// let secret = Code::parse("CBCC", &config).unwrap();
    /// let guess = Code::parse("CCCB", &config).unwrap();
    ///
    /// // Positions 0 and 2 match; overlap is C->3, B->1, so 4 - 2 = 2 color-only
    /// assert_eq!(engine.score(&secret, &guess).unwrap(), Feedback::new(2, 2));
    /// ```
    pub fn score(&self, secret: &Code, guess: &Code) -> Result<Feedback, CodeError> {
        self.config.validate_code(secret)?;
        self.config.validate_code(guess)?;

        let exact = secret
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(s, g)| s == g)
            .count();

        let secret_counts = secret.peg_counts();
        let guess_counts = guess.peg_counts();

        let total: usize = self
            .config
            .alphabet()
            .iter()
            .map(|peg| {
                let in_secret = secret_counts.get(peg).copied().unwrap_or(0);
                let in_guess = guess_counts.get(peg).copied().unwrap_or(0);
                in_secret.min(in_guess)
            })
            .sum();

        Ok(Feedback::new(exact, total - exact))
    }
}
