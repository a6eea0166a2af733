//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero I/O dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod config;
mod feedback;

pub use code::{Code, CodeError, Peg};
pub use config::{ConfigError, GameConfig};
pub use feedback::Feedback;
