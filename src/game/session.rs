//! Interactive console session
//!
//! Runs the line-oriented game protocol: setup prompts, the guess loop, the end of
//! game screens and the play-again prompt. Input and output are generic so the whole
//! session can run against in-memory buffers.

use super::stats::{AggregateStats, ResultLog};
use super::turn::{Game, Turn};
use crate::core::{
    Code, CodeLength, ConfigError, DuplicatePolicy, GuessError, generate, parse_yes_no,
};
use crate::output::display;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, trace};

/// What the player typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    Exit,
    Tutorial,
    Guess(Result<Code, GuessError>),
}

impl TurnInput {
    /// Classify a line typed at the guess prompt
    #[must_use]
    pub fn parse(input: &str, length: CodeLength) -> Self {
        match input.trim() {
            "exit" => Self::Exit,
            "tutorial" => Self::Tutorial,
            other => Self::Guess(Code::parse(other, length)),
        }
    }
}

/// How a game left the turn loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished,
    Quit,
}

/// A run of one or more games sharing statistics
///
/// Owns the random source, the pending [`ResultLog`] and the [`AggregateStats`] for
/// as long as the session lives.
pub struct GameSession<R, W, G> {
    input: R,
    output: W,
    rng: G,
    log: ResultLog,
    stats: AggregateStats,
}

impl<R: BufRead, W: Write, G: Rng> GameSession<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self {
            input,
            output,
            rng,
            log: ResultLog::new(),
            stats: AggregateStats::new(),
        }
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play games until the player declines another, exits, or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the console fails.
    pub fn run(&mut self) -> Result<()> {
        display::write_welcome(&mut self.output)?;

        loop {
            let Some((length, policy)) = self.prompt_setup()? else {
                break;
            };

            let mut game = self.start_game(length, policy);
            if self.play_turns(&mut game)? == GameEnd::Quit {
                break;
            }

            self.finish_game(&game)?;
            if !self.prompt_play_again()? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn prompt_setup(&mut self) -> Result<Option<(CodeLength, DuplicatePolicy)>> {
        let Some(length) = self.prompt_code_length()? else {
            return Ok(None);
        };
        let Some(policy) = self.prompt_duplicates()? else {
            return Ok(None);
        };
        Ok(Some((length, policy)))
    }

    fn prompt_code_length(&mut self) -> Result<Option<CodeLength>> {
        loop {
            display::write_length_menu(&mut self.output)?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };

            match answer.parse::<CodeLength>() {
                Ok(length) => return Ok(Some(length)),
                Err(e) => {
                    debug!(input = %answer, error = %e, "rejected code length");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
    }

    fn prompt_duplicates(&mut self) -> Result<Option<DuplicatePolicy>> {
        loop {
            write!(self.output, "Do you want to play with duplicates? [y/n]: ")?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };

            match answer.parse::<DuplicatePolicy>() {
                Ok(policy) => return Ok(Some(policy)),
                Err(e) => {
                    debug!(input = %answer, error = %e, "rejected duplicate choice");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn start_game(&mut self, length: CodeLength, policy: DuplicatePolicy) -> Game {
        let secret = generate(length, policy, &mut self.rng);
        trace!(%secret, "secret generated");
        info!("game started");
        Game::new(secret, policy)
    }

    fn play_turns(&mut self, game: &mut Game) -> Result<GameEnd> {
        display::write_game_intro(&mut self.output)?;

        while !game.is_over() {
            display::write_turn_reminder(&mut self.output)?;
            write!(self.output, "\nGuess: ")?;

            let Some(line) = self.read_line()? else {
                game.abandon();
                return Ok(GameEnd::Quit);
            };

            match TurnInput::parse(&line, game.length()) {
                TurnInput::Exit => {
                    if self.confirm_exit()? {
                        game.abandon();
                        info!(attempts_used = game.attempts_used(), "game abandoned");
                        return Ok(GameEnd::Quit);
                    }
                }
                TurnInput::Tutorial => display::write_instructions(&mut self.output)?,
                TurnInput::Guess(Err(e)) => {
                    debug!(input = %line, error = %e, "rejected guess");
                    writeln!(self.output, "Error: {e}")?;
                }
                TurnInput::Guess(Ok(guess)) => match game.apply_guess(&guess, &mut self.log)? {
                    Turn::Won { attempts_used } => {
                        info!(attempts_used, "game won");
                        display::write_win(&mut self.output)?;
                    }
                    Turn::Continue {
                        score,
                        attempts_left,
                    } => display::write_hint(&mut self.output, score, attempts_left)?,
                    Turn::Lost { score } => {
                        info!("game lost");
                        display::write_hint(&mut self.output, score, 0)?;
                    }
                },
            }
        }

        Ok(GameEnd::Finished)
    }

    /// Ask for exit confirmation; any answer starting with `y` quits, anything else
    /// resumes the turn
    fn confirm_exit(&mut self) -> Result<bool> {
        write!(self.output, "Are you sure you want to quit? [y/n]: ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(true);
        };

        let confirmed = answer
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y'));
        if confirmed {
            writeln!(self.output, "Exiting game. Thanks for playing!")?;
        }
        Ok(confirmed)
    }

    fn finish_game(&mut self, game: &Game) -> Result<()> {
        display::write_game_over(&mut self.output, game.secret())?;

        let absorbed = self.stats.drain(&mut self.log);
        debug!(
            absorbed,
            games_played = self.stats.games_played(),
            "statistics updated"
        );
        display::write_statistics(&mut self.output, &self.stats.summarize())?;
        Ok(())
    }

    fn prompt_play_again(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "Do you want to play again? [y/n]: ")?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };

            match parse_yes_no(&answer) {
                Some(true) => return Ok(true),
                Some(false) => {
                    writeln!(self.output, "Thanks for playing! Goodbye!")?;
                    return Ok(false);
                }
                None => writeln!(self.output, "Error: {}", ConfigError::InvalidChoice)?,
            }
        }
    }

    /// Read one trimmed line, or `None` at end of input
    ///
    /// Bytes that are not UTF-8 become replacement characters, which every prompt
    /// rejects as ordinary bad input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
