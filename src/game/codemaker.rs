//! The codemaker side of a round

use crate::core::{Code, CodeError, Feedback, GameConfig};
use crate::scoring::ScoringEngine;
use rand::prelude::IndexedRandom;

/// Holder of one round's secret
///
/// The secret is unreadable while the round is live; the only observations a
/// codebreaker can make are feedback values, and `into_secret` releases the
/// code only by consuming the codemaker at round end.
pub struct Codemaker {
    secret: Code,
    engine: ScoringEngine,
}

impl Codemaker {
    /// Create a codemaker with a chosen secret
    ///
    /// # Errors
    /// Returns `CodeError` if the secret is malformed under the given rules.
    pub fn new(config: &GameConfig, secret: Code) -> Result<Self, CodeError> {
        config.validate_code(&secret)?;
        Ok(Self {
            secret,
            engine: ScoringEngine::new(config.clone()),
        })
    }

    /// Create a codemaker with a uniformly random secret
    #[must_use]
    pub fn random(config: &GameConfig) -> Self {
        let mut rng = rand::rng();
        let pegs = (0..config.code_length())
            .map(|_| {
                *config
                    .alphabet()
                    .choose(&mut rng)
                    .expect("config validation guarantees a non-empty alphabet")
            })
            .collect();

        Self {
            secret: Code::from_pegs(pegs),
            engine: ScoringEngine::new(config.clone()),
        }
    }

    /// Answer a guess with feedback
    ///
    /// # Errors
    /// Returns `CodeError` if the guess is malformed.
    pub fn feedback_for(&self, guess: &Code) -> Result<Feedback, CodeError> {
        self.engine.score(&self.secret, guess)
    }

    /// Whether a guess cracks the secret
    ///
    /// # Errors
    /// Returns `CodeError` if the guess is malformed.
    pub fn is_cracked_by(&self, guess: &Code) -> Result<bool, CodeError> {
        let feedback = self.feedback_for(guess)?;
        Ok(feedback.is_crack(self.engine.config().code_length()))
    }

    /// Reveal the secret, ending this codemaker's round
    #[must_use]
    pub fn into_secret(self) -> Code {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_secret() {
        let config = GameConfig::classic();
        let short = Code::from_pegs(vec![]);

        assert!(matches!(
            Codemaker::new(&config, short),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 0
            })
        ));
    }

    #[test]
    fn feedback_matches_engine_scoring() {
        let config = GameConfig::classic();
        let secret = Code::parse("ACBA", &config).unwrap();
        let maker = Codemaker::new(&config, secret).unwrap();

        let guess = Code::parse("ADFE", &config).unwrap();
        assert_eq!(maker.feedback_for(&guess).unwrap(), Feedback::new(1, 0));
    }

    #[test]
    fn crack_detection() {
        let config = GameConfig::classic();
        let secret = Code::parse("BCDF", &config).unwrap();
        let maker = Codemaker::new(&config, secret.clone()).unwrap();

        assert!(maker.is_cracked_by(&secret).unwrap());
        let near_miss = Code::parse("BCDA", &config).unwrap();
        assert!(!maker.is_cracked_by(&near_miss).unwrap());
    }

    #[test]
    fn reveal_returns_original_secret() {
        let config = GameConfig::classic();
        let secret = Code::parse("FADE", &config).unwrap();
        let maker = Codemaker::new(&config, secret.clone()).unwrap();

        assert_eq!(maker.into_secret(), secret);
    }

    #[test]
    fn random_secret_is_well_formed() {
        let config = GameConfig::classic();

        for _ in 0..10 {
            let maker = Codemaker::random(&config);
            let secret = maker.into_secret();
            assert!(config.validate_code(&secret).is_ok());
        }
    }
}
