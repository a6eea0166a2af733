//! Secret deduction command
//!
//! Watches the computer codebreaker deduce a given secret and records the
//! solution path.

use crate::core::{Code, Feedback, GameConfig};
use crate::game::Codemaker;
use crate::solver::CandidateTracker;

/// Result of deducing one secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the deduction
pub struct GuessStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Deduce a specific secret with the candidate-elimination codebreaker
///
/// # Errors
///
/// Returns an error if:
/// - The secret text is malformed (wrong length or symbol outside the alphabet)
/// - The tracker runs dry, which cannot happen with honest feedback and
///   indicates an internal scoring bug
pub fn solve_code(secret_text: &str, config: &GameConfig) -> Result<SolveResult, String> {
    let secret =
        Code::parse(secret_text, config).map_err(|e| format!("Invalid secret code: {e}"))?;
    let maker =
        Codemaker::new(config, secret.clone()).map_err(|e| format!("Invalid secret code: {e}"))?;

    let mut tracker = CandidateTracker::new(config.clone());
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses() {
        let candidates_before = tracker.size();

        let guess = tracker.sample().map_err(|e| e.to_string())?;
        let feedback = maker.feedback_for(&guess).map_err(|e| e.to_string())?;
        tracker.narrow(&guess, feedback).map_err(|e| e.to_string())?;

        let cracked = feedback.is_crack(config.code_length());

        steps.push(GuessStep {
            guess: guess.to_string(),
            feedback,
            candidates_before,
            candidates_after: tracker.size(),
        });

        if cracked {
            return Ok(SolveResult {
                success: true,
                steps,
                secret: secret.to_string(),
            });
        }
    }

    // Guess budget exhausted
    Ok(SolveResult {
        success: false,
        steps,
        secret: secret.to_string(),
    })
}
