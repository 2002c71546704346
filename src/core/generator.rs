//! Secret code generation

use super::{ALPHABET, Code, CodeLength, DuplicatePolicy, MAX_SYMBOL};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Generate a secret of the given length honoring the duplicate policy
///
/// With duplicates allowed every position is an independent draw from the alphabet.
/// Otherwise a shuffled alphabet is consumed left to right, skipping symbols already
/// taken, until enough distinct symbols are collected.
///
/// # Examples
/// ```
/// use mastermind::core::{CodeLength, DuplicatePolicy, generate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let secret = generate(CodeLength::Six, DuplicatePolicy::Forbidden, &mut rng);
/// assert_eq!(secret.digits().len(), 6);
/// assert!(!secret.has_duplicates());
/// ```
pub fn generate<R: Rng + ?Sized>(
    length: CodeLength,
    policy: DuplicatePolicy,
    rng: &mut R,
) -> Code {
    let digits = if policy.allows_duplicates() {
        (0..length.digits())
            .map(|_| rng.random_range(1..=MAX_SYMBOL))
            .collect()
    } else {
        draw_distinct(length.digits(), rng)
    };

    Code::from_valid(digits, length)
}

// Terminates because count never exceeds the alphabet size
fn draw_distinct<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u8> {
    debug_assert!(count <= ALPHABET.len());

    let mut used: FxHashSet<u8> = FxHashSet::default();
    let mut digits = Vec::with_capacity(count);

    while digits.len() < count {
        let mut permutation = ALPHABET;
        permutation.shuffle(rng);

        for symbol in permutation {
            if digits.len() == count {
                break;
            }
            if used.insert(symbol) {
                digits.push(symbol);
            }
        }
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_respects_length() {
        let mut rng = StdRng::seed_from_u64(3);

        for length in CodeLength::ALL {
            for policy in DuplicatePolicy::ALL {
                let code = generate(length, policy, &mut rng);
                assert_eq!(code.length(), length);
                assert_eq!(code.digits().len(), length.digits());
            }
        }
    }

    #[test]
    fn generate_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let code = generate(CodeLength::Eight, DuplicatePolicy::Allowed, &mut rng);
            assert!(code.digits().iter().all(|d| ALPHABET.contains(d)));
        }
    }

    #[test]
    fn generate_forbidden_never_repeats() {
        let mut rng = StdRng::seed_from_u64(11);

        for length in CodeLength::ALL {
            for _ in 0..200 {
                let code = generate(length, DuplicatePolicy::Forbidden, &mut rng);
                assert!(!code.has_duplicates(), "{code} repeats a symbol");
            }
        }
    }

    #[test]
    fn generate_forbidden_eight_uses_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(13);
        let code = generate(CodeLength::Eight, DuplicatePolicy::Forbidden, &mut rng);

        let mut digits = code.digits().to_vec();
        digits.sort_unstable();
        assert_eq!(digits, ALPHABET);
    }

    #[test]
    fn generate_allowed_produces_repeats() {
        // An eight-digit draw with replacement is almost never all distinct
        let mut rng = StdRng::seed_from_u64(17);
        let repeated = (0..200)
            .map(|_| generate(CodeLength::Eight, DuplicatePolicy::Allowed, &mut rng))
            .filter(Code::has_duplicates)
            .count();

        assert!(repeated > 150);
    }

    #[test]
    fn generate_is_reproducible_from_seed() {
        let first = generate(
            CodeLength::Six,
            DuplicatePolicy::Allowed,
            &mut StdRng::seed_from_u64(99),
        );
        let second = generate(
            CodeLength::Six,
            DuplicatePolicy::Allowed,
            &mut StdRng::seed_from_u64(99),
        );

        assert_eq!(first, second);
    }
}
