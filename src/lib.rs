//! Mastermind
//!
//! A console code-breaking game: find a hidden code of 4, 6 or 8 digits (1-8) in ten
//! guesses, guided by exact and partial match hints.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, CodeLength, Score};
//!
//! let secret = Code::parse("1234", CodeLength::Four).unwrap();
//! let guess = Code::parse("5247", CodeLength::Four).unwrap();
//!
//! let score = Score::calculate(&secret, &guess);
//! assert_eq!(score.hint(), "OX__");
//! ```

// Core domain types
pub mod core;

// Turn state machine, statistics and console session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
