//! Positional randomness - penalises ascending and descending runs.

const MIN_LENGTH: usize = 3;

/// Checks that fewer than half of the adjacent pairs are sequential.
///
/// A pair is sequential when its code points differ by exactly one,
/// e.g. `"ab"` or `"21"`.
pub fn positional_randomness(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < MIN_LENGTH {
        return false;
    }

    let sequential = chars
        .windows(2)
        .filter(|w| (w[1] as i64 - w[0] as i64).abs() == 1)
        .count();

    sequential < chars.len() / 2
}
