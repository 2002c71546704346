//! Win/loss bookkeeping across games
//!
//! Finished games land in a [`ResultLog`] queue. The queue is drained into the
//! running [`AggregateStats`] whenever statistics are shown, and the aggregate
//! survives for the rest of the run.

use crate::core::{CodeLength, DuplicatePolicy};
use std::collections::VecDeque;

/// Settings and result of one completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub length: CodeLength,
    pub policy: DuplicatePolicy,
    pub won: bool,
}

/// Queue of outcomes not yet folded into the statistics
#[derive(Debug, Default, Clone)]
pub struct ResultLog {
    entries: VecDeque<GameOutcome>,
}

impl ResultLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome
    pub fn record(&mut self, outcome: GameOutcome) {
        self.entries.push_back(outcome);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Outcomes in the order they were recorded
    pub fn iter(&self) -> impl Iterator<Item = &GameOutcome> {
        self.entries.iter()
    }
}

/// Wins and losses for one configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

/// Running totals per code length and duplicate policy
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateStats {
    buckets: [[Tally; 2]; 3],
}

impl AggregateStats {
    /// All counters start at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every queued outcome into the totals, leaving the log empty
    ///
    /// Returns the number of outcomes absorbed.
    pub fn drain(&mut self, log: &mut ResultLog) -> usize {
        let absorbed = log.entries.len();

        while let Some(outcome) = log.entries.pop_front() {
            let tally = &mut self.buckets[outcome.length.index()][outcome.policy.index()];
            if outcome.won {
                tally.wins += 1;
            } else {
                tally.losses += 1;
            }
        }

        absorbed
    }

    /// Totals for one configuration
    #[must_use]
    pub fn tally(&self, length: CodeLength, policy: DuplicatePolicy) -> Tally {
        self.buckets[length.index()][policy.index()]
    }

    /// Wins under one policy summed across every code length
    #[must_use]
    pub fn total_wins(&self, policy: DuplicatePolicy) -> u32 {
        CodeLength::ALL
            .iter()
            .map(|&length| self.tally(length, policy).wins)
            .sum()
    }

    /// Number of completed games absorbed so far
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.buckets
            .iter()
            .flatten()
            .map(|t| t.wins + t.losses)
            .sum()
    }

    /// Build the statistics report from the current totals
    #[must_use]
    pub fn summarize(&self) -> StatsReport {
        let rows = CodeLength::ALL
            .iter()
            .map(|&length| LengthSummary {
                length,
                without_duplicates: self.tally(length, DuplicatePolicy::Forbidden),
                with_duplicates: self.tally(length, DuplicatePolicy::Allowed),
            })
            .collect();

        let without = PolicyWins {
            policy: DuplicatePolicy::Forbidden,
            wins: self.total_wins(DuplicatePolicy::Forbidden),
        };
        let with = PolicyWins {
            policy: DuplicatePolicy::Allowed,
            wins: self.total_wins(DuplicatePolicy::Allowed),
        };

        let comparison = match without.wins.cmp(&with.wins) {
            std::cmp::Ordering::Greater => Some(WinComparison {
                more: without,
                fewer: with,
            }),
            std::cmp::Ordering::Less => Some(WinComparison {
                more: with,
                fewer: without,
            }),
            std::cmp::Ordering::Equal => None,
        };

        StatsReport { rows, comparison }
    }
}

/// One statistics line: a code length split by duplicate policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthSummary {
    pub length: CodeLength,
    pub without_duplicates: Tally,
    pub with_duplicates: Tally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyWins {
    pub policy: DuplicatePolicy,
    pub wins: u32,
}

/// Which policy has won strictly more games overall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinComparison {
    pub more: PolicyWins,
    pub fewer: PolicyWins,
}

/// Snapshot of the statistics for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub rows: Vec<LengthSummary>,
    /// Absent when both policies have the same number of wins
    pub comparison: Option<WinComparison>,
}
