//! Feedback for a Mastermind guess
//!
//! Feedback is the count pair `(exact, color_only)`: pegs matching in both
//! color and position, and additional pegs matching in color only. Each peg
//! instance in the secret and in the guess is consumed by at most one match,
//! so `exact + color_only` never exceeds the code length.

use std::fmt;

/// Result of comparing a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

impl Feedback {
    /// Create feedback from its two counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Pegs matching in color and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Additional pegs matching in color but not position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// Total color overlap between guess and secret
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.color_only
    }

    /// Whether this feedback cracks a code of the given length
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert!(Feedback::new(4, 0).is_crack(4));
    /// assert!(!Feedback::new(3, 1).is_crack(4));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_crack(self, code_length: usize) -> bool {
        self.exact == code_length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} color-only", self.exact, self.color_only)
    }
}
