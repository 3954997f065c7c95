//! XOR layer - flips every code point against one random key byte.
//!
//! The result is a raw code-point sequence and is not guaranteed to be
//! printable. Starting from ASCII, code points stay within U+0000..=U+00FF.

use crate::random::RandomSource;

/// XORs every code point of `input` with one random key byte.
pub fn xor_transform<R: RandomSource + ?Sized>(input: &str, rng: &R) -> String {
    let key = rng.next_byte() as u32;
    input
        .chars()
        // Only the low byte changes, so surrogate status and range are preserved.
        .map(|c| char::from_u32(c as u32 ^ key).unwrap_or(c))
        .collect()
}
