//! Core domain types for Mastermind
//!
//! Codes, scoring and secret generation. Everything here is pure apart from the
//! injected random source used by [`generate`].

mod code;
mod generator;
mod score;

pub use code::{
    ALPHABET, Code, CodeLength, ConfigError, DuplicatePolicy, GuessError, MAX_SYMBOL,
    parse_yes_no,
};
pub use generator::generate;
pub use score::{BLANK_MARKER, EXACT_MARKER, PARTIAL_MARKER, Score};
