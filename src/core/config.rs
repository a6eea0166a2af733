//! Game configuration
//!
//! All rule parameters (color alphabet, code length, guess budget, round
//! count) live in an explicit [`GameConfig`] value handed to every component
//! at construction. There is no process-wide game state, so independent games
//! and tests run without interference.

use super::{Code, CodeError, Peg};
use std::fmt;

/// Rule parameters for one game session
///
/// The candidate space a codebreaker must search is
/// `alphabet_len^code_length`; [`GameConfig::code_space`] reports it.
/// Materializing that space costs `O(alphabet_len^code_length)` memory, so
/// large alphabets combined with long codes get expensive quickly (the
/// classic 6-color, 4-peg game is only 1296 codes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    alphabet: Vec<Peg>,
    code_length: usize,
    max_guesses: usize,
    rounds: usize,
}

/// Error type for rejected configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than 2 or more than 26 colors requested
    UnsupportedColorCount(usize),
    /// The same symbol appears twice in the alphabet
    DuplicateSymbol(char),
    /// Codes must have at least one peg
    ZeroCodeLength,
    /// The codebreaker needs at least one guess per round
    ZeroGuesses,
    /// A match needs at least one round
    ZeroRounds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedColorCount(count) => {
                write!(f, "Color count must be between 2 and 26, got {count}")
            }
            Self::DuplicateSymbol(symbol) => {
                write!(f, "Symbol '{symbol}' appears more than once in the alphabet")
            }
            Self::ZeroCodeLength => write!(f, "Code length must be at least 1"),
            Self::ZeroGuesses => write!(f, "Max guesses must be at least 1"),
            Self::ZeroRounds => write!(f, "Round count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// The classic board: colors A-F, 4 pegs, 12 guesses, 2 rounds
    #[must_use]
    pub fn classic() -> Self {
        Self::new(6, 4, 12, 2).expect("classic parameters are valid")
    }

    /// Create a configuration using the first `colors` letters as the alphabet
    ///
    /// # Errors
    /// Returns `ConfigError` if any parameter is out of range.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4, 12, 2).unwrap();
    /// assert_eq!(config.code_space(), 1296);
    ///
    /// assert!(GameConfig::new(1, 4, 12, 2).is_err());
    /// ```
    pub fn new(
        colors: usize,
        code_length: usize,
        max_guesses: usize,
        rounds: usize,
    ) -> Result<Self, ConfigError> {
        if !(2..=26).contains(&colors) {
            return Err(ConfigError::UnsupportedColorCount(colors));
        }

        let alphabet = ('A'..='Z').take(colors).map(Peg::new).collect();
        Self::from_alphabet(alphabet, code_length, max_guesses, rounds)
    }

    /// Create a configuration from an explicit ordered alphabet
    ///
    /// # Errors
    /// Returns `ConfigError` if the alphabet has an unsupported size or a
    /// repeated symbol, or if any count parameter is zero.
    pub fn from_alphabet(
        alphabet: Vec<Peg>,
        code_length: usize,
        max_guesses: usize,
        rounds: usize,
    ) -> Result<Self, ConfigError> {
        if !(2..=26).contains(&alphabet.len()) {
            return Err(ConfigError::UnsupportedColorCount(alphabet.len()));
        }

        for (i, peg) in alphabet.iter().enumerate() {
            if alphabet[..i].contains(peg) {
                return Err(ConfigError::DuplicateSymbol(peg.symbol()));
            }
        }

        if code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }
        if rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }

        Ok(Self {
            alphabet,
            code_length,
            max_guesses,
            rounds,
        })
    }

    /// The ordered color alphabet
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[Peg] {
        &self.alphabet
    }

    /// Number of pegs in every code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Guess budget per round
    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Rounds per match
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Whether a peg belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, peg: Peg) -> bool {
        self.alphabet.contains(&peg)
    }

    /// Total number of possible codes (`alphabet_len^code_length`)
    #[must_use]
    pub fn code_space(&self) -> usize {
        self.alphabet.len().pow(self.code_length as u32)
    }

    /// Check a code against the configured length and alphabet
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` or `CodeError::InvalidSymbol`.
    pub fn validate_code(&self, code: &Code) -> Result<(), CodeError> {
        if code.len() != self.code_length {
            return Err(CodeError::InvalidLength {
                expected: self.code_length,
                actual: code.len(),
            });
        }

        for &peg in code.pegs() {
            if !self.contains(peg) {
                return Err(CodeError::InvalidSymbol(peg.symbol()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_parameters() {
        let config = GameConfig::classic();

        assert_eq!(config.alphabet().len(), 6);
        assert_eq!(config.alphabet()[0], Peg::new('A'));
        assert_eq!(config.alphabet()[5], Peg::new('F'));
        assert_eq!(config.code_length(), 4);
        assert_eq!(config.max_guesses(), 12);
        assert_eq!(config.rounds(), 2);
    }

    #[test]
    fn classic_code_space() {
        assert_eq!(GameConfig::classic().code_space(), 1296); // 6^4
    }

    #[test]
    fn code_space_scales_with_parameters() {
        let small = GameConfig::new(2, 3, 12, 2).unwrap();
        assert_eq!(small.code_space(), 8); // 2^3

        let large = GameConfig::new(8, 5, 12, 2).unwrap();
        assert_eq!(large.code_space(), 32768); // 8^5
    }

    #[test]
    fn rejects_unsupported_color_counts() {
        assert!(matches!(
            GameConfig::new(0, 4, 12, 2),
            Err(ConfigError::UnsupportedColorCount(0))
        ));
        assert!(matches!(
            GameConfig::new(1, 4, 12, 2),
            Err(ConfigError::UnsupportedColorCount(1))
        ));
        assert!(matches!(
            GameConfig::new(27, 4, 12, 2),
            Err(ConfigError::UnsupportedColorCount(27))
        ));
    }

    #[test]
    fn rejects_zero_counts() {
        assert!(matches!(
            GameConfig::new(6, 0, 12, 2),
            Err(ConfigError::ZeroCodeLength)
        ));
        assert!(matches!(
            GameConfig::new(6, 4, 0, 2),
            Err(ConfigError::ZeroGuesses)
        ));
        assert!(matches!(
            GameConfig::new(6, 4, 12, 0),
            Err(ConfigError::ZeroRounds)
        ));
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let alphabet = vec![Peg::new('A'), Peg::new('B'), Peg::new('A')];
        assert!(matches!(
            GameConfig::from_alphabet(alphabet, 4, 12, 2),
            Err(ConfigError::DuplicateSymbol('A'))
        ));
    }

    #[test]
    fn custom_alphabet_accepted() {
        let alphabet = vec![Peg::new('R'), Peg::new('G'), Peg::new('B')];
        let config = GameConfig::from_alphabet(alphabet, 2, 10, 1).unwrap();

        assert_eq!(config.code_space(), 9);
        assert!(config.contains(Peg::new('R')));
        assert!(!config.contains(Peg::new('A')));
    }

    #[test]
    fn validate_code_checks_length_and_alphabet() {
        let config = GameConfig::classic();

        let good = Code::parse("ABCD", &config).unwrap();
        assert!(config.validate_code(&good).is_ok());

        let short = Code::from_pegs(vec![Peg::new('A')]);
        assert!(matches!(
            config.validate_code(&short),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 1
            })
        ));

        let foreign = Code::from_pegs(vec![
            Peg::new('A'),
            Peg::new('B'),
            Peg::new('C'),
            Peg::new('Z'),
        ]);
        assert!(matches!(
            config.validate_code(&foreign),
            Err(CodeError::InvalidSymbol('Z'))
        ));
    }
}
