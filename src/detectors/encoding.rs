//! Encoding pattern - interleaved symbols or a base64-like shape.

use crate::layers::SYMBOLS;

const BASE64_BLOCK: usize = 4;

/// Checks for a shared symbol or a base64-like length and alphabet.
pub fn encoding_pattern(password: &str) -> bool {
    if password.chars().any(|c| SYMBOLS.contains(&c)) {
        return true;
    }

    password.chars().count() % BASE64_BLOCK == 0
        && password
            .chars()
            .all(|c| c.is_alphanumeric() || c == '+' || c == '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_contains_symbol() {
        assert!(encoding_pattern("abc!"));
        assert!(encoding_pattern("x(y"));
    }

    #[test]
    fn test_encoding_base64_shape() {
        assert!(encoding_pattern("Hello123"));
        assert!(encoding_pattern("ab/c"));
        assert!(encoding_pattern("QUJD/ab9"));
    }

    #[test]
    fn test_encoding_wrong_length() {
        assert!(!encoding_pattern("hello"));
        assert!(!encoding_pattern("ab/"));
    }

    #[test]
    fn test_encoding_foreign_symbol() {
        // '-' is neither in the symbol set nor in the base64 alphabet
        assert!(!encoding_pattern("ab-c"));
        assert!(!encoding_pattern("a==b"));
    }

    #[test]
    fn test_encoding_empty() {
        // Zero length is a multiple of four with no offending characters
        assert!(encoding_pattern(""));
    }
}
