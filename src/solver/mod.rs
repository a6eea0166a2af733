//! Codebreaker deduction
//!
//! Candidate-elimination over the code space: every observed feedback prunes
//! the codes that could not have produced it.

mod tracker;

pub use tracker::{CandidateTracker, EmptyCandidateSet};
