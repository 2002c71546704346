//! Score command
//!
//! Scores a single guess against a given secret without playing a game.

use crate::core::{Code, Score};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: String,
    pub guess: String,
    pub score: Score,
}

/// Score `guess` against `secret`
///
/// The secret may be 4, 6 or 8 digits; the guess must match its length. Both
/// follow the same rules as guesses typed during a game.
///
/// # Errors
///
/// Returns an error if either code is invalid or the lengths differ.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret_code = Code::parse_any(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess_code =
        Code::parse(guess, secret_code.length()).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreResult {
        secret: secret_code.to_string(),
        guess: guess_code.to_string(),
        score: Score::calculate(&secret_code, &guess_code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_pair() {
        let result = score_codes("1234", "5247").unwrap();

        assert_eq!(result.secret, "1234");
        assert_eq!(result.guess, "5247");
        assert_eq!(result.score.hint(), "OX__");
    }

    #[test]
    fn score_perfect_pair() {
        let result = score_codes("87654321", "87654321").unwrap();
        assert!(result.score.is_perfect());
    }

    #[test]
    fn score_invalid_secret_returns_error() {
        let err = score_codes("12345", "12345").err().unwrap();
        assert!(err.starts_with("Invalid secret"));

        assert!(score_codes("1290", "1234").is_err());
    }

    #[test]
    fn score_mismatched_guess_returns_error() {
        let err = score_codes("1234", "123456").err().unwrap();
        assert!(err.starts_with("Invalid guess"));

        assert!(score_codes("1234", "12a4").is_err());
    }
}
