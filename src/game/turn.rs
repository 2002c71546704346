//! Single-game state machine
//!
//! A [`Game`] owns the secret and the attempt budget. Each scored guess either wins,
//! spends one attempt, or spends the last attempt and loses. Completed games record
//! exactly one [`GameOutcome`]; abandoned games record nothing.

use super::stats::{GameOutcome, ResultLog};
use crate::core::{Code, CodeLength, DuplicatePolicy, Score};
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: u8 = 10;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    /// The player confirmed an exit; counts as neither win nor loss
    Abandoned,
}

/// Result of applying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Won { attempts_used: u8 },
    Continue { score: Score, attempts_left: u8 },
    Lost { score: Score },
}

/// Error type for guesses the game cannot accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Finished(GameStatus),
    LengthMismatch {
        expected: CodeLength,
        actual: CodeLength,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(status) => write!(f, "Game is already over ({status:?})"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess has {actual} digits, game uses {expected}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// One game of Mastermind
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    policy: DuplicatePolicy,
    attempts_left: u8,
    attempts_used: u8,
    status: GameStatus,
}

impl Game {
    /// Start a game with a full attempt budget
    #[must_use]
    pub const fn new(secret: Code, policy: DuplicatePolicy) -> Self {
        Self {
            secret,
            policy,
            attempts_left: MAX_ATTEMPTS,
            attempts_used: 0,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> CodeLength {
        self.secret.length()
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Score a guess and advance the game
    ///
    /// A winning guess drains the remaining budget. When a game finishes, its
    /// outcome is appended to `log`.
    ///
    /// # Errors
    /// Returns `GameError` if the game is already over or the guess length differs
    /// from the secret's. Nothing changes in either case.
    pub fn apply_guess(&mut self, guess: &Code, log: &mut ResultLog) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::Finished(self.status));
        }
        if guess.length() != self.length() {
            return Err(GameError::LengthMismatch {
                expected: self.length(),
                actual: guess.length(),
            });
        }

        self.attempts_used += 1;

        if *guess == self.secret {
            self.attempts_left = 0;
            self.finish(GameStatus::Won, log);
            return Ok(Turn::Won {
                attempts_used: self.attempts_used,
            });
        }

        let score = Score::calculate(&self.secret, guess);
        self.attempts_left -= 1;

        if self.attempts_left == 0 {
            self.finish(GameStatus::Lost, log);
            Ok(Turn::Lost { score })
        } else {
            Ok(Turn::Continue {
                score,
                attempts_left: self.attempts_left,
            })
        }
    }

    /// Give up on the game without recording an outcome
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.status = GameStatus::Abandoned;
        }
    }

    fn finish(&mut self, status: GameStatus, log: &mut ResultLog) {
        self.status = status;
        log.record(GameOutcome {
            length: self.length(),
            policy: self.policy,
            won: status == GameStatus::Won,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse_any(s).unwrap()
    }

    fn new_game() -> Game {
        Game::new(code("1234"), DuplicatePolicy::Forbidden)
    }

    #[test]
    fn new_game_has_full_budget() {
        let game = new_game();

        assert_eq!(game.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
    }

    #[test]
    fn winning_guess_ends_game_immediately() {
        let mut game = new_game();
        let mut log = ResultLog::new();

        let turn = game.apply_guess(&code("1234"), &mut log).unwrap();

        assert_eq!(turn, Turn::Won { attempts_used: 1 });
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_left(), 0);
        assert_eq!(
            log.iter().copied().collect::<Vec<_>>(),
            vec![GameOutcome {
                length: CodeLength::Four,
                policy: DuplicatePolicy::Forbidden,
                won: true,
            }]
        );
    }

    #[test]
    fn wrong_guess_spends_one_attempt() {
        let mut game = new_game();
        let mut log = ResultLog::new();

        let turn = game.apply_guess(&code("5247"), &mut log).unwrap();

        match turn {
            Turn::Continue {
                score,
                attempts_left,
            } => {
                assert_eq!(score.hint(), "OX__");
                assert_eq!(attempts_left, MAX_ATTEMPTS - 1);
            }
            other => panic!("expected Continue, got {other:?}"),
        }
        assert!(log.is_empty());
    }

    #[test]
    fn ten_misses_lose_the_game() {
        let mut game = new_game();
        let mut log = ResultLog::new();

        for _ in 0..MAX_ATTEMPTS - 1 {
            let turn = game.apply_guess(&code("5678"), &mut log).unwrap();
            assert!(matches!(turn, Turn::Continue { .. }));
        }
        let last = game.apply_guess(&code("5678"), &mut log).unwrap();

        assert!(matches!(last, Turn::Lost { .. }));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempts_left(), 0);
        assert_eq!(log.len(), 1);
        assert!(!log.iter().next().unwrap().won);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = new_game();
        let mut log = ResultLog::new();

        for _ in 0..MAX_ATTEMPTS - 1 {
            game.apply_guess(&code("4321"), &mut log).unwrap();
        }
        let turn = game.apply_guess(&code("1234"), &mut log).unwrap();

        assert_eq!(
            turn,
            Turn::Won {
                attempts_used: MAX_ATTEMPTS
            }
        );
        assert_eq!(log.len(), 1);
        assert!(log.iter().next().unwrap().won);
    }

    #[test]
    fn finished_game_rejects_further_guesses() {
        let mut game = new_game();
        let mut log = ResultLog::new();
        game.apply_guess(&code("1234"), &mut log).unwrap();

        let err = game.apply_guess(&code("1234"), &mut log).unwrap_err();

        assert_eq!(err, GameError::Finished(GameStatus::Won));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn mismatched_length_is_rejected_without_cost() {
        let mut game = new_game();
        let mut log = ResultLog::new();

        let err = game.apply_guess(&code("123456"), &mut log).unwrap_err();

        assert_eq!(
            err,
            GameError::LengthMismatch {
                expected: CodeLength::Four,
                actual: CodeLength::Six,
            }
        );
        assert_eq!(game.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn abandoned_game_records_nothing() {
        let mut game = new_game();
        let mut log = ResultLog::new();
        game.apply_guess(&code("5678"), &mut log).unwrap();

        game.abandon();

        assert_eq!(game.status(), GameStatus::Abandoned);
        assert!(game.is_over());
        assert!(log.is_empty());
        assert!(game.apply_guess(&code("1234"), &mut log).is_err());
    }

    #[test]
    fn abandon_after_finish_keeps_result() {
        let mut game = new_game();
        let mut log = ResultLog::new();
        game.apply_guess(&code("1234"), &mut log).unwrap();

        game.abandon();

        assert_eq!(game.status(), GameStatus::Won);
    }
}
