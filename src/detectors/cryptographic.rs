//! Cryptographic depth - hex-heavy content as left by hashing.

const MIN_LENGTH: usize = 8;

/// Checks that more than half of the characters are hex digits.
pub fn cryptographic_depth(password: &str) -> bool {
    let len = password.chars().count();
    if len < MIN_LENGTH {
        return false;
    }

    let hex = password.chars().filter(|c| c.is_ascii_hexdigit()).count();
    hex * 2 > len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_too_short() {
        assert!(!cryptographic_depth("deadbee"));
    }

    #[test]
    fn test_crypto_all_hex() {
        assert!(cryptographic_depth("deadbeef"));
        assert!(cryptographic_depth("0123ABCDef"));
    }

    #[test]
    fn test_crypto_exactly_half_is_not_enough() {
        assert!(!cryptographic_depth("Hello123"));
    }

    #[test]
    fn test_crypto_majority_hex() {
        // 5 of 9
        assert!(cryptographic_depth("abcdeXYZW"));
        assert!(!cryptographic_depth("abcdXYZWV"));
    }
}
