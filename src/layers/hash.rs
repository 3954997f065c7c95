//! Hash-append layer - binds the layer to the content instead of chance.

use sha2::{Digest, Sha256};

const HASH_SUFFIX_LEN: usize = 4;

/// Appends the first four hex characters of the SHA-256 of `input`.
pub fn hash_append(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let hex = hex::encode(digest);

    let mut result = String::with_capacity(input.len() + HASH_SUFFIX_LEN);
    result.push_str(input);
    result.push_str(&hex[..HASH_SUFFIX_LEN]);
    result
}
