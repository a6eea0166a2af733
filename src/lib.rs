//! Mastermind Solver
//!
//! A two-player Mastermind duel where the computer breaks codes by candidate
//! elimination: every feedback prunes the codes that could not have produced
//! it, and the next guess is drawn uniformly from what survives.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameConfig};
//! use mastermind_solver::scoring::ScoringEngine;
//!
//! let config = GameConfig::classic();
//! let engine = ScoringEngine::new(config.clone());
//!
//! let secret = Code::parse("ACBA", &config).unwrap();
//! let guess = Code::parse("ADFE", &config).unwrap();
//!
//! let feedback = engine.score(&secret, &guess).unwrap();
//! assert_eq!(feedback.exact(), 1);
//! assert_eq!(feedback.color_only(), 0);
//! ```

// Core domain types
pub mod core;

// Feedback scoring
pub mod scoring;

// Codebreaker deduction
pub mod solver;

// Roles and score bookkeeping
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
