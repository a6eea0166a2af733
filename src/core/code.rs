//! Mastermind code representation
//!
//! A Code stores an ordered row of colored pegs. Validity (length, alphabet
//! membership) is relative to a [`GameConfig`], so parsing takes the config
//! rather than hardcoding a length.

use super::GameConfig;
use rustc_hash::FxHashMap;
use std::fmt;

/// A single colored peg, identified by its symbol in the configured alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Peg(char);

impl Peg {
    /// Create a peg from its color symbol
    #[inline]
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Get the color symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of pegs, used for both secrets and guesses
///
/// Positions are significant and duplicate colors are allowed. A Code is
/// immutable once formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: Vec<Peg>,
}

/// Error type for malformed codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// The code's length does not match the configured code length
    InvalidLength { expected: usize, actual: usize },
    /// A peg symbol outside the configured alphabet
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} pegs, got {actual}")
            }
            Self::InvalidSymbol(symbol) => {
                write!(f, "Symbol '{symbol}' is not in the color alphabet")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from player text against a game configuration
    ///
    /// Input is trimmed and uppercased, so `"acba"` and `"ACBA"` parse to the
    /// same code.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The text does not have exactly `config.code_length()` symbols
    /// - Any symbol is outside the configured alphabet
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::classic();
    /// let code = Code::parse("acba", &config).unwrap();
    /// assert_eq!(code.to_string(), "ACBA");
    ///
    /// assert!(Code::parse("ACB", &config).is_err());
    /// assert!(Code::parse("ACBZ", &config).is_err());
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let pegs: Vec<Peg> = text
            .trim()
            .chars()
            .map(|c| Peg::new(c.to_ascii_uppercase()))
            .collect();

        let code = Self { pegs };
        config.validate_code(&code)?;
        Ok(code)
    }

    /// Assemble a code directly from pegs
    ///
    /// No validation is performed; callers holding pegs drawn from a config's
    /// alphabet (candidate generation, random secrets) use this path.
    #[inline]
    #[must_use]
    pub fn from_pegs(pegs: Vec<Peg>) -> Self {
        Self { pegs }
    }

    /// Get the pegs in order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// Number of pegs in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Whether the code has no pegs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Get the count of each color in the code
    ///
    /// Used for duplicate-safe feedback scoring.
    #[inline]
    pub(crate) fn peg_counts(&self) -> FxHashMap<Peg, usize> {
        let mut counts = FxHashMap::default();
        for &peg in &self.pegs {
            *counts.entry(peg).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
