//! Two-player game modelling
//!
//! Roles are explicit tagged values assigned once per round, not mutable
//! flags: a [`Codemaker`] is the only value that can produce feedback, and
//! revealing its secret consumes it. Score bookkeeping follows the classic
//! rules (the codemaker earns a point per guess consumed, plus a bonus if
//! the code survives the round).

mod codemaker;
mod role;
mod score;

pub use codemaker::Codemaker;
pub use role::Role;
pub use score::{RoundOutcome, Scoreboard, Seat};
