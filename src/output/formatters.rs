//! Formatting utilities for terminal output

use crate::core::{BLANK_MARKER, EXACT_MARKER, PARTIAL_MARKER, Score};
use crate::game::{LengthSummary, PolicyWins};
use colored::Colorize;

/// Format a hint with each marker colored
#[must_use]
pub fn colored_hint(score: Score) -> String {
    let mut result = String::new();

    for marker in score.hint().chars() {
        let cell = marker.to_string();
        let painted = match marker {
            EXACT_MARKER => cell.bright_green().bold(),
            PARTIAL_MARKER => cell.bright_yellow().bold(),
            BLANK_MARKER => cell.bright_black(),
            _ => unreachable!(),
        };
        result.push_str(&painted.to_string());
    }

    result
}

/// Format one statistics row, e.g.
/// `Code Length 4: Wins [No Dup: 1, Dup: 0], Losses [No Dup: 0, Dup: 2]`
#[must_use]
pub fn length_row(row: &LengthSummary) -> String {
    format!(
        "Code Length {}: Wins [No Dup: {}, Dup: {}], Losses [No Dup: {}, Dup: {}]",
        row.length,
        row.without_duplicates.wins,
        row.with_duplicates.wins,
        row.without_duplicates.losses,
        row.with_duplicates.losses,
    )
}

/// Format a policy's win total, e.g. `With Duplicates (3 wins)`
#[must_use]
pub fn policy_wins(entry: PolicyWins) -> String {
    format!("{} ({} wins)", entry.policy.label(), entry.wins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, CodeLength, DuplicatePolicy};
    use crate::game::Tally;

    #[test]
    fn colored_hint_keeps_marker_order() {
        colored::control::set_override(false);

        let secret = Code::parse_any("1234").unwrap();
        let guess = Code::parse_any("5247").unwrap();
        let score = Score::calculate(&secret, &guess);

        assert_eq!(colored_hint(score), "OX__");
    }

    #[test]
    fn length_row_layout() {
        let row = LengthSummary {
            length: CodeLength::Six,
            without_duplicates: Tally { wins: 1, losses: 4 },
            with_duplicates: Tally { wins: 2, losses: 3 },
        };

        assert_eq!(
            length_row(&row),
            "Code Length 6: Wins [No Dup: 1, Dup: 2], Losses [No Dup: 4, Dup: 3]"
        );
    }

    #[test]
    fn policy_wins_layout() {
        let entry = PolicyWins {
            policy: DuplicatePolicy::Forbidden,
            wins: 1,
        };
        assert_eq!(policy_wins(entry), "No Duplicates (1 wins)");
    }
}
