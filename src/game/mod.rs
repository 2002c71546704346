//! Game flow
//!
//! The turn state machine for a single game, statistics across games, and the
//! console session that ties them together.

pub mod session;
mod stats;
mod turn;

pub use session::{GameSession, TurnInput};
pub use stats::{
    AggregateStats, GameOutcome, LengthSummary, PolicyWins, ResultLog, StatsReport, Tally,
    WinComparison,
};
pub use turn::{Game, GameError, GameStatus, MAX_ATTEMPTS, Turn};
