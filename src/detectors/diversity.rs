//! Character diversity - uppercase, lowercase, digits, symbols.

const MIN_CLASSES: usize = 2;

/// Checks if the password mixes at least two character classes.
pub fn character_diversity(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    let classes = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count();
    classes >= MIN_CLASSES
}
