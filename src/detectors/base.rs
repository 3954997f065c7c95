//! Base layer - present in every non-empty password.

/// Returns `true` for any non-empty password.
pub fn base_layer(password: &str) -> bool {
    !password.is_empty()
}
