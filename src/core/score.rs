//! Guess scoring and hint rendering
//!
//! A score counts exact matches (right symbol, right position) and partial matches
//! (right symbol, wrong position). The hint shown to the player lists the counts in a
//! fixed order, so it never reveals which positions were right.

use super::Code;
use rustc_hash::FxHashMap;
use std::fmt;

/// Hint marker for a symbol in the correct position
pub const EXACT_MARKER: char = 'O';

/// Hint marker for a symbol present elsewhere in the secret
pub const PARTIAL_MARKER: char = 'X';

/// Hint marker for a symbol that earned nothing
pub const BLANK_MARKER: char = '_';

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    exact: usize,
    partial: usize,
    length: usize,
}

impl Score {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches, and for every unmatched position add the
    ///    secret's symbol to a remaining-count map
    /// 2. Second pass: for every unmatched position, credit a partial match if the
    ///    guess symbol still has remaining secret occurrences, consuming one
    ///
    /// Repeated guess symbols therefore earn at most as many partial credits as the
    /// secret has unmatched copies of that symbol.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::new(vec![1, 2, 3, 4]).unwrap();
    /// let guess = Code::new(vec![5, 2, 4, 7]).unwrap();
    /// let score = Score::calculate(&secret, &guess);
    ///
    /// assert_eq!(score.exact(), 1);
    /// assert_eq!(score.partial(), 1);
    /// assert_eq!(score.hint(), "OX__");
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.length(), guess.length(), "codes must share a length");

        let pairs = || secret.digits().iter().zip(guess.digits());
        let mut remaining: FxHashMap<u8, usize> = FxHashMap::default();
        let mut exact = 0;

        // First pass: exact positions, tally the secret symbols left over
        for (&s, &g) in pairs() {
            if s == g {
                exact += 1;
            } else {
                *remaining.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: misplaced symbols, bounded by what the first pass left
        let mut partial = 0;
        for (&s, &g) in pairs() {
            if s == g || !secret.contains(g) {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                partial += 1;
                *count -= 1;
            }
        }

        Self {
            exact,
            partial,
            length: secret.digits().len(),
        }
    }

    /// Symbols in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Symbols present in the secret but in a different position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Symbols that earned neither credit
    #[inline]
    #[must_use]
    pub const fn blanks(self) -> usize {
        self.length - self.exact - self.partial
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == self.length
    }

    /// Render the hint string, e.g. `OOX_`
    ///
    /// Exact markers come first, then partial markers, then blanks.
    #[must_use]
    pub fn hint(self) -> String {
        let mut hint = String::with_capacity(self.length);
        hint.extend(std::iter::repeat_n(EXACT_MARKER, self.exact));
        hint.extend(std::iter::repeat_n(PARTIAL_MARKER, self.partial));
        hint.extend(std::iter::repeat_n(BLANK_MARKER, self.blanks()));
        hint
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALPHABET, CodeLength, DuplicatePolicy, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        Code::parse_any(s).unwrap()
    }

    #[test]
    fn score_example_from_instructions() {
        let score = Score::calculate(&code("1234"), &code("5247"));

        assert_eq!(score.exact(), 1);
        assert_eq!(score.partial(), 1);
        assert_eq!(score.blanks(), 2);
        assert_eq!(score.hint(), "OX__");
    }

    #[test]
    fn score_perfect_match() {
        let score = Score::calculate(&code("1234"), &code("1234"));

        assert!(score.is_perfect());
        assert_eq!(score.partial(), 0);
        assert_eq!(score.hint(), "OOOO");
    }

    #[test]
    fn score_nothing_in_common() {
        let score = Score::calculate(&code("1234"), &code("5678"));

        assert_eq!(score.exact(), 0);
        assert_eq!(score.partial(), 0);
        assert_eq!(score.hint(), "____");
    }

    #[test]
    fn score_all_misplaced() {
        let score = Score::calculate(&code("1234"), &code("4321"));

        assert_eq!(score.exact(), 0);
        assert_eq!(score.partial(), 4);
        assert_eq!(score.hint(), "XXXX");
    }

    #[test]
    fn score_repeated_guess_symbol_credited_once() {
        // Secret has a single 1; only one of the guess's 1s can earn credit
        let score = Score::calculate(&code("1234"), &code("5111"));

        assert_eq!(score.exact(), 0);
        assert_eq!(score.partial(), 1);
    }

    #[test]
    fn score_exact_match_consumes_symbol() {
        // The 1 in position 0 is exact, so the other guess 1s find nothing left
        let score = Score::calculate(&code("1234"), &code("1111"));

        assert_eq!(score.exact(), 1);
        assert_eq!(score.partial(), 0);
        assert_eq!(score.hint(), "O___");
    }

    #[test]
    fn score_repeated_secret_symbols() {
        // Secret 1122, guess 2211: every symbol misplaced, all four credited
        let score = Score::calculate(&code("1122"), &code("2211"));
        assert_eq!(score.partial(), 4);

        // Secret 1122, guess 1213: one exact 1, one misplaced 2, one misplaced 1
        let score = Score::calculate(&code("1122"), &code("1213"));
        assert_eq!(score.exact(), 1);
        assert_eq!(score.partial(), 2);
        assert_eq!(score.hint(), "OXX_");
    }

    #[test]
    fn score_length_eight() {
        let score = Score::calculate(&code("12345678"), &code("12345687"));

        assert_eq!(score.exact(), 6);
        assert_eq!(score.partial(), 2);
        assert_eq!(score.hint(), "OOOOOOXX");
    }

    #[test]
    fn score_properties_hold_for_random_pairs() {
        let mut rng = StdRng::seed_from_u64(42);

        for length in CodeLength::ALL {
            for _ in 0..200 {
                let secret = generate(length, DuplicatePolicy::Allowed, &mut rng);
                let guess = generate(length, DuplicatePolicy::Allowed, &mut rng);

                let forward = Score::calculate(&secret, &guess);
                let backward = Score::calculate(&guess, &secret);

                assert!(forward.exact() + forward.partial() <= length.digits());
                assert_eq!(forward.hint().chars().count(), length.digits());
                assert_eq!(forward.is_perfect(), secret == guess);
                // Swapping secret and guess changes nothing
                assert_eq!(forward, backward);
                // Pure: same inputs, same result
                assert_eq!(forward, Score::calculate(&secret, &guess));
            }
        }
    }

    #[test]
    fn score_partial_is_multiset_overlap_minus_exact() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let secret = generate(CodeLength::Six, DuplicatePolicy::Allowed, &mut rng);
            let guess = generate(CodeLength::Six, DuplicatePolicy::Allowed, &mut rng);

            let overlap: usize = ALPHABET
                .iter()
                .map(|&symbol| {
                    let in_secret = secret.digits().iter().filter(|&&d| d == symbol).count();
                    let in_guess = guess.digits().iter().filter(|&&d| d == symbol).count();
                    in_secret.min(in_guess)
                })
                .sum();

            let score = Score::calculate(&secret, &guess);
            assert_eq!(score.exact() + score.partial(), overlap);
        }
    }

    #[test]
    fn score_display_matches_hint() {
        let score = Score::calculate(&code("1234"), &code("1243"));
        assert_eq!(format!("{score}"), "OOXX");
    }
}
