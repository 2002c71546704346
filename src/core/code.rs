//! Mastermind code representation
//!
//! A Code is an ordered sequence of digits drawn from the 1-8 alphabet. The hidden
//! secret and every player guess share this type, so validation lives here too.

use std::fmt;
use std::str::FromStr;

/// Symbols a code may contain
pub const ALPHABET: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Highest symbol in [`ALPHABET`]
pub const MAX_SYMBOL: u8 = 8;

/// Supported code lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeLength {
    Four,
    Six,
    Eight,
}

impl CodeLength {
    /// Every supported length, shortest first
    pub const ALL: [Self; 3] = [Self::Four, Self::Six, Self::Eight];

    /// Number of digits in a code of this length
    #[inline]
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Position of this length in [`CodeLength::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Four => 0,
            Self::Six => 1,
            Self::Eight => 2,
        }
    }

    /// Look up the length matching a digit count
    #[must_use]
    pub const fn from_digits(count: usize) -> Option<Self> {
        match count {
            4 => Some(Self::Four),
            6 => Some(Self::Six),
            8 => Some(Self::Eight),
            _ => None,
        }
    }
}

impl fmt::Display for CodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits())
    }
}

impl FromStr for CodeLength {
    type Err = ConfigError;

    /// Parse the player's answer to the code length prompt
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| ConfigError::NotANumber)?;

        usize::try_from(value)
            .ok()
            .and_then(Self::from_digits)
            .ok_or(ConfigError::UnsupportedLength(value))
    }
}

/// Whether a secret may repeat symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    Forbidden,
    Allowed,
}

impl DuplicatePolicy {
    /// Both policies, in statistics column order
    pub const ALL: [Self; 2] = [Self::Forbidden, Self::Allowed];

    /// Position of this policy in [`DuplicatePolicy::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Forbidden => 0,
            Self::Allowed => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn allows_duplicates(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Human-readable name used in statistics
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forbidden => "No Duplicates",
            Self::Allowed => "With Duplicates",
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_yes_no(s) {
            Some(true) => Ok(Self::Allowed),
            Some(false) => Ok(Self::Forbidden),
            None => Err(ConfigError::InvalidChoice),
        }
    }
}

/// Interpret a `y`/`n` answer, ignoring case and surrounding whitespace
#[must_use]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let answer = input.trim();
    if answer.eq_ignore_ascii_case("y") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

/// Error type for invalid game setup answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotANumber,
    UnsupportedLength(i64),
    InvalidChoice,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Invalid input type. Please enter a number."),
            Self::UnsupportedLength(_) => {
                write!(f, "Invalid code length. Please enter 4, 6, or 8.")
            }
            Self::InvalidChoice => write!(f, "Invalid choice. Please enter 'y' or 'n'."),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for invalid codes
///
/// Variants are listed in the order validation checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    NonNumeric,
    LengthMismatch { expected: usize, actual: usize },
    UnsupportedLength(usize),
    OutOfRange(u8),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Input cannot be empty. Please try again."),
            Self::NonNumeric => {
                write!(f, "Guess contains invalid characters. Use only numbers.")
            }
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "Guess length does not match the code length ({actual} digits, expected {expected})."
            ),
            Self::UnsupportedLength(len) => {
                write!(f, "Code must be 4, 6 or 8 digits long, got {len}.")
            }
            Self::OutOfRange(_) => write!(f, "Guess contains invalid numbers. Only use 1 to 8."),
        }
    }
}

impl std::error::Error for GuessError {}

/// A sequence of symbols from [`ALPHABET`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: Vec<u8>,
    length: CodeLength,
}

impl Code {
    /// Build a code from raw symbol values
    ///
    /// # Errors
    /// Returns `GuessError` if the length is not 4, 6 or 8, or a symbol is outside 1-8.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new(vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::new(vec![1, 2, 3]).is_err());
    /// assert!(Code::new(vec![1, 2, 3, 9]).is_err());
    /// ```
    pub fn new(digits: impl Into<Vec<u8>>) -> Result<Self, GuessError> {
        let digits = digits.into();
        let length = CodeLength::from_digits(digits.len())
            .ok_or(GuessError::UnsupportedLength(digits.len()))?;
        check_range(&digits)?;
        Ok(Self { digits, length })
    }

    /// Parse a guess typed by the player for a game of the given length
    ///
    /// Checks run in a fixed order: empty input, non-digit characters, length,
    /// then the 1-8 symbol range. The first failure is reported.
    ///
    /// # Errors
    /// Returns the `GuessError` for the first rule the input breaks.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeLength, GuessError};
    ///
    /// assert!(Code::parse("5247", CodeLength::Four).is_ok());
    /// assert_eq!(Code::parse("12a4", CodeLength::Four), Err(GuessError::NonNumeric));
    /// ```
    pub fn parse(input: &str, length: CodeLength) -> Result<Self, GuessError> {
        let digits = numeric_digits(input)?;
        if digits.len() != length.digits() {
            return Err(GuessError::LengthMismatch {
                expected: length.digits(),
                actual: digits.len(),
            });
        }
        check_range(&digits)?;
        Ok(Self { digits, length })
    }

    /// Parse a code whose length is taken from the input itself
    ///
    /// # Errors
    /// Same rules as [`Code::parse`], except any supported length is accepted.
    pub fn parse_any(input: &str) -> Result<Self, GuessError> {
        let digits = numeric_digits(input)?;
        let length = CodeLength::from_digits(digits.len())
            .ok_or(GuessError::UnsupportedLength(digits.len()))?;
        check_range(&digits)?;
        Ok(Self { digits, length })
    }

    /// Assemble a code from digits already known to be valid
    pub(crate) fn from_valid(digits: Vec<u8>, length: CodeLength) -> Self {
        debug_assert_eq!(digits.len(), length.digits());
        debug_assert!(digits.iter().all(|d| (1..=MAX_SYMBOL).contains(d)));
        Self { digits, length }
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> CodeLength {
        self.length
    }

    /// Check if the code contains a specific symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.digits.contains(&symbol)
    }

    /// Check if any symbol appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = [false; ALPHABET.len() + 1];
        self.digits.iter().any(|&d| {
            let slot = &mut seen[usize::from(d)];
            std::mem::replace(slot, true)
        })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

fn numeric_digits(input: &str) -> Result<Vec<u8>, GuessError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GuessError::Empty);
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::NonNumeric);
    }
    Ok(input.bytes().map(|b| b - b'0').collect())
}

fn check_range(digits: &[u8]) -> Result<(), GuessError> {
    match digits.iter().find(|d| !(1..=MAX_SYMBOL).contains(*d)) {
        Some(&d) => Err(GuessError::OutOfRange(d)),
        None => Ok(()),
    }
}
