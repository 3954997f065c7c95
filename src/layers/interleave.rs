//! Interleave layer - inserts random symbols between characters.

use super::SYMBOLS;
use crate::random::RandomSource;

/// Inserts one random symbol after every even-indexed character.
///
/// Output length is `len + ceil(len / 2)`.
pub fn interleave_symbols<R: RandomSource + ?Sized>(input: &str, rng: &R) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for (i, c) in input.chars().enumerate() {
        result.push(c);
        if i % 2 == 0 {
            let idx = rng.next_byte() as usize % SYMBOLS.len();
            result.push(SYMBOLS[idx]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_interleave_even_length() {
        let rng = SequenceRandom::new(&[0, 1]);
        assert_eq!(interleave_symbols("abcd", &rng), "a!bc@d");
    }

    #[test]
    fn test_interleave_odd_length() {
        let rng = SequenceRandom::new(&[11, 12]);
        // 12 % 12 wraps back to the first symbol
        assert_eq!(interleave_symbols("abc", &rng), "a+bc!");
    }

    #[test]
    fn test_interleave_empty() {
        let rng = SequenceRandom::new(&[0]);
        assert_eq!(interleave_symbols("", &rng), "");
    }

    #[test]
    fn test_interleave_only_uses_symbol_set() {
        let rng = SequenceRandom::new(&[3, 200, 255, 17, 64]);
        let out = interleave_symbols("0123456789", &rng);
        assert_eq!(out.chars().count(), 15);
        let inserted: Vec<char> = out.chars().filter(|c| !c.is_ascii_digit()).collect();
        assert_eq!(inserted.len(), 5);
        assert!(inserted.iter().all(|c| SYMBOLS.contains(c)));
    }
}
