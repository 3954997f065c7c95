//! Secure random byte source.

use rand::RngCore;
use rand::rngs::OsRng;

/// Narrow capability supplying random bytes to the generator and transforms.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Returns `n` random bytes.
    fn next_bytes(&self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n];
        self.fill_bytes(&mut bytes);
        bytes
    }

    /// Returns one random byte.
    fn next_byte(&self) -> u8 {
        let mut byte = [0u8; 1];
        self.fill_bytes(&mut byte);
        byte[0]
    }
}

/// Operating system entropy source.
///
/// Stateless handle over [`OsRng`]: every call reads fresh bytes from the OS,
/// so one instance can be shared across threads without locking. Panics only
/// if the OS entropy source is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn fill_bytes(&self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

/// Replays a fixed byte sequence, wrapping around at the end.
#[cfg(test)]
pub(crate) struct SequenceRandom {
    bytes: Vec<u8>,
    position: std::cell::Cell<usize>,
}

#[cfg(test)]
impl SequenceRandom {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        assert!(!bytes.is_empty(), "sequence must not be empty");
        Self {
            bytes: bytes.to_vec(),
            position: std::cell::Cell::new(0),
        }
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        for slot in dest.iter_mut() {
            let pos = self.position.get();
            *slot = self.bytes[pos % self.bytes.len()];
            self.position.set(pos + 1);
        }
    }
}
