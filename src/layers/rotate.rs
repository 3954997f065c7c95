//! Rotate layer - cyclic left rotation by a random offset.

use crate::random::RandomSource;

/// Rotates `input` left by a random offset modulo its length.
pub fn rotate<R: RandomSource + ?Sized>(input: &str, rng: &R) -> String {
    let chars: Vec<char> = input.chars().collect();
    let byte = rng.next_byte() as usize;
    let offset = if chars.is_empty() { 0 } else { byte % chars.len() };

    chars[offset..].iter().chain(chars[..offset].iter()).collect()
}
